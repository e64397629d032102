//! Module defining the canvas configuration.

use serde::Deserialize;

use crate::model::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};


/// Pixel dimensions of the canvas that memes are rendered on.
///
/// Only the width is authoritative: the height of a rendered meme
/// is always derived from the aspect ratio of its source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of the canvas in pixels.
    #[serde(alias = "canvasWidth")]
    pub width: u32,
    /// Initial height of the canvas in pixels.
    #[serde(alias = "canvasHeight")]
    pub height: u32,
}

impl CanvasConfig {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        CanvasConfig{width, height}
    }

    /// Whether both dimensions are positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Compute the dimensions of a meme rendered from an image of given size.
    ///
    /// The width stays as configured, while the height follows
    /// the image's aspect ratio (rounded down, but never zero).
    pub fn fit_image(&self, (image_width, image_height): (u32, u32)) -> (u32, u32) {
        if image_width == 0 {
            return (self.width, self.height);
        }
        let height = u64::from(self.width) * u64::from(image_height) / u64::from(image_width);
        (self.width, height.max(1).min(u64::from(u32::max_value())) as u32)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
