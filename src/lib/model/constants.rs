//! Module defining constants relevant to the data model.

use super::types::{Color, FontWeight};


/// Default width of the canvas, in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 500;
/// Default initial height of the canvas, in pixels.
///
/// The final height always follows the aspect ratio of the source image.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 500;

/// Name of the default font family.
pub const DEFAULT_FONT_FAMILY: &str = "impact";
/// Default weight of the caption font.
pub const DEFAULT_FONT_WEIGHT: FontWeight = FontWeight::Regular;
/// Default size of the caption font, in points.
pub const DEFAULT_FONT_SIZE: f32 = 40.0;
/// Default line height, as a multiplier of the font size.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// Directory where fonts are looked up unless configured otherwise.
pub const DEFAULT_FONT_DIRECTORY: &str = "data/fonts";

/// Color of the caption text.
pub const TEXT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Color of the caption text outline.
/// This should be the inversion of TEXT_COLOR.
pub const OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);
/// Width of the text outline, relative to the font size.
pub const OUTLINE_WIDTH_RATIO: f32 = 0.2;

/// Maximum number of lines a single caption may span.
pub const MAX_CAPTION_LINES: usize = 2;
/// Factor by which the font size is multiplied when a caption doesn't fit.
pub const FONT_SHRINK_FACTOR: f32 = 0.8;
/// Smallest font size (in points) that captions will be shrunk to.
pub const MIN_FONT_SIZE: f32 = 6.0;
/// Maximum number of times the font size is shrunk for a single caption.
pub const MAX_FONT_SHRINK_STEPS: usize = 32;

/// Default quality of generated JPEG images (in %).
pub const DEFAULT_JPEG_QUALITY: u8 = 85;
