use macroquad::prelude::*;

use fishtank_core::snapshot::TankSnapshot;
use fishtank_core::tank::TankBounds;

mod fish;

pub use fish::{FishView, SpriteDecodeError, decode_data_uri};

pub const WATER_COLOR: Color = Color::from_rgba(224, 247, 250, 255);
pub const FRAME_COLOR: Color = Color::from_rgba(136, 136, 136, 255);
pub const BACKDROP_COLOR: Color = Color::from_rgba(38, 38, 38, 255);
pub const PLACEHOLDER_TEXT: &str = "The tank is empty, draw a fish!";

/// Border around the arena, so the frame and a little backdrop stay visible.
pub const TANK_MARGIN: f32 = 20.0;
const FRAME_THICKNESS: f32 = 2.0;
const PLACEHOLDER_FONT_SIZE: f32 = 28.0;

/// The independent rendering surface. Built once from a snapshot, it owns
/// its copy of every entity's kinematic state and advances it on its own
/// animation clock; the process that produced the snapshot is never
/// consulted again.
pub struct TankSurface {
    bounds: TankBounds,
    fish: Vec<FishView>,
    rng: fastrand::Rng,
}

impl TankSurface {
    pub fn from_snapshot(snapshot: &TankSnapshot) -> Result<Self, SpriteDecodeError> {
        let fish = snapshot
            .entities
            .iter()
            .map(FishView::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        log_surface_event(&format!("snapshot loaded with {} fish", fish.len()));

        Ok(Self {
            bounds: snapshot.bounds,
            fish,
            rng: fastrand::Rng::new(),
        })
    }

    pub fn fish_count(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Window size that fits the arena plus its margin.
    pub fn screen_size(&self) -> (f32, f32) {
        (
            self.bounds.width as f32 + TANK_MARGIN * 2.0,
            self.bounds.height as f32 + TANK_MARGIN * 2.0,
        )
    }

    /// One simulation tick for every fish.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        for fish in &mut self.fish {
            fish.state.step(bounds, &mut self.rng);
        }
    }

    pub fn render(&self) {
        clear_background(BACKDROP_COLOR);

        let width = self.bounds.width as f32;
        let height = self.bounds.height as f32;
        draw_rectangle(TANK_MARGIN, TANK_MARGIN, width, height, WATER_COLOR);
        draw_rectangle_lines(
            TANK_MARGIN,
            TANK_MARGIN,
            width,
            height,
            FRAME_THICKNESS * 2.0,
            FRAME_COLOR,
        );

        if self.fish.is_empty() {
            self.render_placeholder(width, height);
            return;
        }

        for fish in &self.fish {
            fish.draw(TANK_MARGIN, TANK_MARGIN);
        }
    }

    fn render_placeholder(&self, width: f32, height: f32) {
        let dims = measure_text(PLACEHOLDER_TEXT, None, PLACEHOLDER_FONT_SIZE as u16, 1.0);
        draw_text(
            PLACEHOLDER_TEXT,
            TANK_MARGIN + (width - dims.width) * 0.5,
            TANK_MARGIN + height * 0.5,
            PLACEHOLDER_FONT_SIZE,
            FRAME_COLOR,
        );
    }
}

/// Fetch and decode a snapshot, then stand the surface up from it.
pub async fn load_surface(path: &str) -> Result<TankSurface, SpriteDecodeError> {
    let raw = load_string(path)
        .await
        .map_err(|err| SpriteDecodeError::new(format!("failed to read {path}: {err:?}")))?;
    let snapshot = TankSnapshot::from_json(&raw)
        .map_err(|err| SpriteDecodeError::new(format!("invalid snapshot in {path}: {err}")))?;
    TankSurface::from_snapshot(&snapshot)
}

fn log_surface_event(label: &str) {
    #[cfg(target_arch = "wasm32")]
    macroquad::miniquad::info!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", label);
}
