pub mod extractor;
pub mod preprocess;
pub mod session;
pub mod sprite;

pub use extractor::{MAX_SPRITE_EDGE, WHITE_THRESHOLD, extract, extract_from_bytes};
pub use preprocess::glyph_from_canvas;
pub use session::{Session, SubmitOutcome};
pub use sprite::Sprite;
