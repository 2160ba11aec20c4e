use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::sprite::Sprite;

/// Pixels whose R, G and B all exceed this are residual white canvas and
/// get their alpha cleared. A genuinely white stroke is indistinguishable
/// from background on purpose: drawing white is the erase mechanism.
pub const WHITE_THRESHOLD: u8 = 245;

/// Longest sprite edge after normalization. Smaller drawings are never
/// upscaled.
pub const MAX_SPRITE_EDGE: u32 = 120;

/// Turn a raw stroke canvas into a clean sprite: crop to the inked bounding
/// box, key out the white canvas, normalize the size. `None` means the
/// canvas held no ink, which is a legitimate empty result rather than an
/// error.
pub fn extract(canvas: &RgbaImage) -> Option<Sprite> {
    let content = content_bounds(canvas)?;
    let mut cropped = imageops::crop_imm(
        canvas,
        content.x_min,
        content.y_min,
        content.x_max - content.x_min + 1,
        content.y_max - content.y_min + 1,
    )
    .to_image();
    key_background(&mut cropped);
    Some(Sprite::new(normalize_size(cropped)))
}

/// Raw-bytes entry point for callers holding an untyped canvas buffer.
/// A malformed shape (fewer than four channels, or a short buffer) degrades
/// to the empty outcome instead of failing.
pub fn extract_from_bytes(width: u32, height: u32, channels: u32, data: &[u8]) -> Option<Sprite> {
    if channels < 4 {
        return None;
    }
    let stride = channels as usize;
    let expected = (width as usize) * (height as usize) * stride;
    if data.len() != expected {
        return None;
    }

    let mut canvas = RgbaImage::new(width, height);
    for (index, pixel) in canvas.pixels_mut().enumerate() {
        let at = index * stride;
        *pixel = Rgba([data[at], data[at + 1], data[at + 2], data[at + 3]]);
    }
    extract(&canvas)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContentBounds {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

// Minimal axis-aligned rectangle over pixels with any ink (alpha > 0).
fn content_bounds(canvas: &RgbaImage) -> Option<ContentBounds> {
    let mut bounds: Option<ContentBounds> = None;

    for (x, y, pixel) in canvas.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => ContentBounds {
                x_min: x,
                x_max: x,
                y_min: y,
                y_max: y,
            },
            Some(found) => ContentBounds {
                x_min: found.x_min.min(x),
                x_max: found.x_max.max(x),
                y_min: found.y_min.min(y),
                y_max: found.y_max.max(y),
            },
        });
    }

    bounds
}

/// Clear the alpha of near-white pixels, leaving every other pixel exactly
/// as drawn. Idempotent: keyed pixels stay keyed, everything else is never
/// touched.
pub fn key_background(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD {
            pixel.0[3] = 0;
        }
    }
}

// Scale so the longer edge fits MAX_SPRITE_EDGE, preserving aspect ratio.
// Already-small sprites pass through untouched.
fn normalize_size(image: RgbaImage) -> RgbaImage {
    let longest = image.width().max(image.height());
    if longest <= MAX_SPRITE_EDGE {
        return image;
    }

    let scale = MAX_SPRITE_EDGE as f32 / longest as f32;
    let width = ((image.width() as f32 * scale).round() as u32).max(1);
    let height = ((image.height() as f32 * scale).round() as u32).max(1);
    imageops::resize(&image, width, height, FilterType::Lanczos3)
}
