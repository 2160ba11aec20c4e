use fastrand::Rng;

use crate::motion::FishState;
use crate::sprite::SpritePair;
use crate::tank::TankBounds;

pub const SPAWN_VX_SPAN: f32 = 2.0;
pub const SPAWN_VY_SPAN: f32 = 1.0;

/// One swimming entity: an immutable oriented sprite pair plus the kinematic
/// state it was seeded with. After the tank hands a snapshot to the
/// rendering surface, the state stored here is only a record of the initial
/// placement; the live state evolves on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    sprites: SpritePair,
    state: FishState,
}

impl Fish {
    /// Place a new fish fully inside the tank, away from the walls, with a
    /// random non-zero starting velocity.
    pub fn spawn(bounds: TankBounds, sprites: SpritePair, rng: &mut Rng) -> Self {
        let width = sprites.width as f32;
        let height = sprites.height as f32;

        let pos = [
            uniform_in(rng, width, bounds.width as f32 - width),
            uniform_in(rng, height, bounds.height as f32 - height),
        ];
        let mut vel = [
            uniform_in(rng, -SPAWN_VX_SPAN, SPAWN_VX_SPAN),
            uniform_in(rng, -SPAWN_VY_SPAN, SPAWN_VY_SPAN),
        ];
        if vel[0] == 0.0 && vel[1] == 0.0 {
            vel[0] = 1.0;
        }

        Self {
            sprites,
            state: FishState::new(pos, vel, width, height),
        }
    }

    pub fn sprites(&self) -> &SpritePair {
        &self.sprites
    }

    pub fn state(&self) -> &FishState {
        &self.state
    }
}

fn uniform_in(rng: &mut Rng, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        // An oversized sprite leaves no spawn margin; pin to the valid end.
        return hi.max(0.0);
    }
    lo + rng.f32() * (hi - lo)
}
