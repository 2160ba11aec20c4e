use serde::{Deserialize, Serialize};

use crate::entity::Fish;
use crate::motion::FishState;
use crate::tank::TankBounds;

/// One-shot handoff payload for the rendering surface. Produced by
/// `Tank::snapshot`; once serialized, the surface owns its copy of the
/// simulated state and the originating process is never consulted again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSnapshot {
    pub bounds: TankBounds,
    pub entities: Vec<EntitySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: String,
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub width: u32,
    pub height: u32,
    #[serde(rename = "spriteLeft")]
    pub sprite_left: String,
    #[serde(rename = "spriteRight")]
    pub sprite_right: String,
}

impl TankSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl EntitySnapshot {
    pub fn describe(index: usize, fish: &Fish) -> Self {
        let state = fish.state();
        let sprites = fish.sprites();
        Self {
            id: format!("fish-{index}"),
            pos: state.pos,
            vel: state.vel,
            width: sprites.width,
            height: sprites.height,
            sprite_left: sprites.left_uri.clone(),
            sprite_right: sprites.right_uri.clone(),
        }
    }

    /// Rebuild the live kinematic state on the receiving side.
    pub fn state(&self) -> FishState {
        FishState::new(self.pos, self.vel, self.width as f32, self.height as f32)
    }
}
