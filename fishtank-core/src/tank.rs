use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::entity::Fish;
use crate::snapshot::{EntitySnapshot, TankSnapshot};
use crate::sprite::SpritePair;

/// Arena dimensions in pixels. Fixed for the lifetime of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankBounds {
    pub width: u32,
    pub height: u32,
}

impl TankBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The bounded arena owning the fish collection. Insertion order is both
/// identity order and z-order for rendering; fish are never removed or
/// repositioned by the tank after creation. All later motion happens on the
/// rendering surface's copy of the snapshot data, so the states stored here
/// stay the record of initial placement.
#[derive(Debug)]
pub struct Tank {
    bounds: TankBounds,
    fish: Vec<Fish>,
    rng: Rng,
}

impl Tank {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, Rng::new())
    }

    /// Deterministic spawn placement for tests.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(width, height, Rng::with_seed(seed))
    }

    fn with_rng(width: u32, height: u32, rng: Rng) -> Self {
        Self {
            bounds: TankBounds::new(width, height),
            fish: Vec::new(),
            rng,
        }
    }

    pub fn bounds(&self) -> TankBounds {
        self.bounds
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn fish_count(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Spawn a fish for an accepted sprite and append it. Requires `&mut`,
    /// so concurrent additions are serialized by the borrow checker.
    pub fn add_fish(&mut self, sprites: SpritePair) {
        let fish = Fish::spawn(self.bounds, sprites, &mut self.rng);
        self.fish.push(fish);
        log::info!("added a fish, the tank now holds {}", self.fish.len());
    }

    /// Freeze the current population into the handoff payload for the
    /// rendering surface. Ids are assigned by insertion index.
    pub fn snapshot(&self) -> TankSnapshot {
        TankSnapshot {
            bounds: self.bounds,
            entities: self
                .fish
                .iter()
                .enumerate()
                .map(|(index, fish)| EntitySnapshot::describe(index, fish))
                .collect(),
        }
    }
}
