use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use macroquad::prelude::*;

use fishtank_core::motion::FishState;
use fishtank_core::snapshot::EntitySnapshot;
use fishtank_core::sprite::PNG_DATA_URI_PREFIX;

/// An embedded sprite raster that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteDecodeError(pub String);

impl SpriteDecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Surface-side copy of one entity: its live kinematic state plus both
/// oriented textures decoded from the snapshot's data URIs.
pub struct FishView {
    pub state: FishState,
    left: Texture2D,
    right: Texture2D,
}

impl FishView {
    pub fn from_entity(entity: &EntitySnapshot) -> Result<Self, SpriteDecodeError> {
        let left = texture_from_data_uri(&entity.sprite_left)?;
        let right = texture_from_data_uri(&entity.sprite_right)?;
        Ok(Self {
            state: entity.state(),
            left,
            right,
        })
    }

    pub fn draw(&self, origin_x: f32, origin_y: f32) {
        draw_texture(
            self.texture(),
            origin_x + self.state.pos[0],
            origin_y + self.state.pos[1],
            WHITE,
        );
    }

    // Re-picked from the velocity sign every frame.
    fn texture(&self) -> &Texture2D {
        if self.state.facing_left() {
            &self.left
        } else {
            &self.right
        }
    }
}

/// Strip the PNG data-URI prefix and decode the base64 payload.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, SpriteDecodeError> {
    let payload = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| SpriteDecodeError::new("sprite is not a PNG data URI"))?;
    STANDARD
        .decode(payload)
        .map_err(|err| SpriteDecodeError::new(format!("invalid sprite payload: {err}")))
}

fn texture_from_data_uri(uri: &str) -> Result<Texture2D, SpriteDecodeError> {
    let bytes = decode_data_uri(uri)?;
    Ok(Texture2D::from_file_with_format(&bytes, None))
}
