//! Module with meme generator configuration.

use crate::model::{CanvasConfig, FontConfig, OutputFormat};


/// Structure holding configuration for the `MemeGenerator`.
///
/// This is shared with every `RenderTask`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Target size of the canvas.
    /// Its height is only the initial one, as images keep their aspect ratio.
    pub canvas: CanvasConfig,
    /// Font the captions are rendered with.
    pub font: FontConfig,
    /// Format of the generated images.
    pub format: OutputFormat,
}
