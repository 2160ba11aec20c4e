pub const GLYPH_EDGE: usize = 28;
const GLYPH_LEN: usize = GLYPH_EDGE * GLYPH_EDGE;

/// Confidence above this counts as "fish".
pub const FISH_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Fixed-shape classifier input: a 28x28 single-channel raster, ink bright
/// on a dark background. Replaces the loosely-shaped tensors at the model
/// boundary with a value validated once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph28 {
    pixels: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    InvalidLength(usize),
}

impl Glyph28 {
    pub fn new(pixels: Vec<u8>) -> Result<Self, GlyphError> {
        if pixels.len() != GLYPH_LEN {
            return Err(GlyphError::InvalidLength(pixels.len()));
        }
        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensities scaled to `[0, 1]`, the form model implementations feed
    /// into their input layer.
    pub fn normalized(&self) -> Vec<f32> {
        self.pixels
            .iter()
            .map(|&value| value as f32 / 255.0)
            .collect()
    }
}

/// Outcome of one classification attempt by the external model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub is_fish: bool,
    pub confidence: f32,
}

impl Verdict {
    pub fn from_confidence(confidence: f32) -> Self {
        Self {
            is_fish: confidence > FISH_CONFIDENCE_THRESHOLD,
            confidence,
        }
    }
}

/// The classification model stays an opaque function owned by the caller;
/// nothing in this workspace runs inference.
pub type ClassifyFn = Box<dyn Fn(&Glyph28) -> Verdict + Send + Sync + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_shape() {
        let glyph = Glyph28::new(vec![0; GLYPH_LEN]).unwrap();
        assert_eq!(glyph.pixels().len(), GLYPH_LEN);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            Glyph28::new(vec![0; 27 * 28]),
            Err(GlyphError::InvalidLength(27 * 28))
        );
        assert_eq!(Glyph28::new(Vec::new()), Err(GlyphError::InvalidLength(0)));
    }

    #[test]
    fn normalized_scales_to_unit_range() {
        let mut pixels = vec![0; GLYPH_LEN];
        pixels[0] = 255;
        pixels[1] = 51;
        let glyph = Glyph28::new(pixels).unwrap();
        let normalized = glyph.normalized();
        assert_eq!(normalized[0], 1.0);
        assert!((normalized[1] - 0.2).abs() < 1e-6);
        assert_eq!(normalized[2], 0.0);
    }

    #[test]
    fn verdict_applies_threshold() {
        assert!(Verdict::from_confidence(0.51).is_fish);
        assert!(!Verdict::from_confidence(0.5).is_fish);
        assert!(!Verdict::from_confidence(0.0).is_fish);
    }

    #[test]
    fn classify_fn_is_a_plain_boxed_closure() {
        let classify: ClassifyFn = Box::new(|glyph| {
            let ink: f32 = glyph.normalized().iter().sum();
            Verdict::from_confidence(if ink > 0.0 { 1.0 } else { 0.0 })
        });
        let blank = Glyph28::new(vec![0; GLYPH_LEN]).unwrap();
        assert!(!classify(&blank).is_fish);
    }
}
