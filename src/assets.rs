use std::path::{Path, PathBuf};

use macroquad::miniquad::conf::Icon;
use macroquad::prelude::*;
use thiserror::Error;

pub const FOOD_SPRITE_SIZE: u16 = 32;

const APPLE_RED: [u8; 4] = [200, 40, 40, 255];
const APPLE_SHINE: [u8; 4] = [240, 120, 110, 255];
const LEAF_GREEN: [u8; 4] = [60, 170, 60, 255];
const STEM_BROWN: [u8; 4] = [100, 60, 30, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read food sprite {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode food sprite {}: {}", .path.display(), .reason)]
    Decode { path: PathBuf, reason: String },
}

/// Paints an apple into a `size`×`size` RGBA buffer.
pub fn apple_pixels(size: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(size * size * 4);
    let s = size as f32;
    let (cx, cy, r) = (s * 0.5, s * 0.56, s * 0.40);
    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let d2 = (px - cx).powi(2) + (py - cy).powi(2);
            let shine = (px - cx * 0.75).powi(2) + (py - cy * 0.8).powi(2) < (r * 0.22).powi(2);
            let stem = (px - cx).abs() < s * 0.05 && py < cy - r * 0.7 && py > s * 0.04;
            let leaf = (px - cx * 1.25).powi(2) / (s * 0.14).powi(2) + (py - s * 0.12).powi(2) / (s * 0.06).powi(2) < 1.0;
            let px_color = if stem {
                STEM_BROWN
            } else if leaf {
                LEAF_GREEN
            } else if d2 < r * r {
                if shine { APPLE_SHINE } else { APPLE_RED }
            } else {
                CLEAR
            };
            bytes.extend_from_slice(&px_color);
        }
    }
    bytes
}

/// Window icon in the three sizes miniquad wants.
pub fn window_icon() -> Icon {
    let mut icon = Icon { small: [0; 16 * 16 * 4], medium: [0; 32 * 32 * 4], big: [0; 64 * 64 * 4] };
    icon.small.copy_from_slice(&apple_pixels(16));
    icon.medium.copy_from_slice(&apple_pixels(32));
    icon.big.copy_from_slice(&apple_pixels(64));
    icon
}

/// Reads and decodes the food sprite at `path` if given, otherwise paints
/// the apple. Needs no graphics context, so it runs before the window opens.
pub fn food_image(path: Option<&Path>) -> Result<Image, AssetError> {
    let Some(path) = path else {
        return Ok(Image {
            bytes: apple_pixels(FOOD_SPRITE_SIZE as usize),
            width: FOOD_SPRITE_SIZE,
            height: FOOD_SPRITE_SIZE,
        });
    };
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Image::from_file_with_format(&bytes, None).map_err(|err| AssetError::Decode {
        path: path.to_path_buf(),
        reason: format!("{err:?}"),
    })
}

/// Drawable handles the renderer needs.
pub struct Assets {
    pub food: Texture2D,
}

impl Assets {
    /// Uploads the decoded images. Call from inside the window.
    pub fn new(food: &Image) -> Self {
        let food = Texture2D::from_image(food);
        food.set_filter(FilterMode::Nearest);
        Self { food }
    }
}
