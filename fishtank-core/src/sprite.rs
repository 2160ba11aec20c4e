pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Simulation-side view of one accepted drawing: pixel dimensions plus both
/// oriented rasters pre-encoded as embeddable data URIs. As drawn faces
/// right; the mirrored twin faces left. The core never inspects pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePair {
    pub width: u32,
    pub height: u32,
    pub left_uri: String,
    pub right_uri: String,
}

impl SpritePair {
    pub fn new(
        width: u32,
        height: u32,
        left_uri: impl Into<String>,
        right_uri: impl Into<String>,
    ) -> Self {
        Self {
            width,
            height,
            left_uri: left_uri.into(),
            right_uri: right_uri.into(),
        }
    }
}
