//! Module defining the font configuration.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

use std::fmt;

use serde::Deserialize;

use crate::model::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};


macro_attr! {
    /// Weight of the caption font.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(FontWeights))]
    pub enum FontWeight {
        /// Regular (normal) weight.
        Regular,
        /// Bold weight.
        Bold,
        /// Weight lighter than regular.
        Lighter,
        /// Weight heavier than bold.
        Bolder,
    }
}

impl FontWeight {
    /// Lowercase name of the weight, as used in configuration & font file names.
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
            FontWeight::Lighter => "lighter",
            FontWeight::Bolder => "bolder",
        }
    }

    #[inline]
    pub fn is_regular(self) -> bool {
        self == FontWeight::Regular
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::Regular
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}


/// Font used to render the captions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Name of the font family, e.g. `"impact"`.
    #[serde(alias = "fontFamily")]
    pub family: String,
    /// Weight of the font. Absent weight means regular.
    #[serde(alias = "fontWeight")]
    pub weight: Option<FontWeight>,
    /// Initial font size in points.
    ///
    /// Captions that don't fit will be rendered with a smaller size.
    #[serde(alias = "fontSize")]
    pub size: f32,
    /// Height of a caption line, as a multiplier of the font size.
    #[serde(alias = "lineHeight")]
    pub line_height: f32,
}

impl FontConfig {
    /// Weight of the font, with absent weight meaning regular.
    #[inline]
    pub fn weight(&self) -> FontWeight {
        self.weight.unwrap_or_default()
    }

    /// Whether the size & line height are positive, finite numbers
    /// and the family isn't blank.
    pub fn is_valid(&self) -> bool {
        let positive = |x: f32| x.is_finite() && x > 0.0;
        !self.family.trim().is_empty() && positive(self.size) && positive(self.line_height)
    }

    /// Whether using the other config requires loading a different font file.
    #[inline]
    pub(crate) fn same_face_as(&self, other: &FontConfig) -> bool {
        self.family == other.family && self.weight() == other.weight()
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig{
            family: DEFAULT_FONT_FAMILY.into(),
            weight: None,
            size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}
