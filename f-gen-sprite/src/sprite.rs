use std::error::Error;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{RgbaImage, imageops};

use fishtank_core::sprite::{PNG_DATA_URI_PREFIX, SpritePair};

/// A cropped, background-keyed, size-normalized raster for one accepted
/// drawing. Immutable once created; as drawn it faces right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The leftward twin used while swimming against the x axis.
    pub fn mirrored(&self) -> RgbaImage {
        imageops::flip_horizontal(&self.image)
    }

    /// Encode both orientations into the simulation-side sprite value.
    pub fn encode_pair(&self) -> Result<SpritePair, Box<dyn Error>> {
        let right_uri = png_data_uri(&self.image)?;
        let left_uri = png_data_uri(&self.mirrored())?;
        Ok(SpritePair::new(
            self.image.width(),
            self.image.height(),
            left_uri,
            right_uri,
        ))
    }
}

/// PNG-encode a raster and wrap it as an embeddable data URI.
pub fn png_data_uri(image: &RgbaImage) -> Result<String, Box<dyn Error>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(&bytes)))
}
