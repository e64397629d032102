//! Module defining the construction-time options of the generator.

use serde::Deserialize;

use super::canvas::CanvasConfig;
use super::font::FontConfig;


/// Options for creating a `MemeGenerator`.
///
/// Any group that's left out will use the default values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    #[serde(alias = "canvasOptions")]
    pub canvas: Option<CanvasConfig>,
    #[serde(alias = "fontOptions")]
    pub font: Option<FontConfig>,
}

impl Options {
    /// Canvas configuration these options resolve to.
    #[inline]
    pub fn canvas(&self) -> CanvasConfig {
        self.canvas.unwrap_or_default()
    }

    /// Font configuration these options resolve to.
    #[inline]
    pub fn font(&self) -> FontConfig {
        self.font.clone().unwrap_or_default()
    }
}
