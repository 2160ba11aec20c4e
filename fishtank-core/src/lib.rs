pub mod classifier;
pub mod entity;
pub mod motion;
pub mod snapshot;
pub mod sprite;
pub mod tank;

pub use classifier::{ClassifyFn, GLYPH_EDGE, Glyph28, GlyphError, Verdict};
pub use entity::Fish;
pub use motion::{FishState, MAX_SPEED, MIN_SPEED};
pub use snapshot::{EntitySnapshot, TankSnapshot};
pub use sprite::{PNG_DATA_URI_PREFIX, SpritePair};
pub use tank::{Tank, TankBounds};
