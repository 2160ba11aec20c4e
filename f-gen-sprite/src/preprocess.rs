use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use fishtank_core::classifier::{GLYPH_EDGE, Glyph28};

/// Derive the classifier's fixed-shape input from the raw canvas:
/// grayscale, 28x28, colors inverted so ink reads bright on a dark
/// background (the canvas is drawn dark on white).
pub fn glyph_from_canvas(canvas: &RgbaImage) -> Glyph28 {
    let gray = DynamicImage::ImageRgba8(canvas.clone()).into_luma8();
    let mut resized = imageops::resize(
        &gray,
        GLYPH_EDGE as u32,
        GLYPH_EDGE as u32,
        FilterType::Lanczos3,
    );
    imageops::invert(&mut resized);
    Glyph28::new(resized.into_raw()).expect("28x28 resize must match the glyph shape")
}
