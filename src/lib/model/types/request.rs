//! Module defining the captioning request.

use std::fmt;

use serde::Deserialize;


/// Describes a single meme: the source image and its two captions.
#[derive(Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct CaptionRequest {
    /// Text drawn at the top of the image. May be empty.
    #[serde(alias = "topText")]
    pub top_text: String,
    /// Text drawn at the bottom of the image. May be empty.
    #[serde(alias = "bottomText")]
    pub bottom_text: String,
    /// Path to a local image file, or URL of a remote one.
    #[serde(alias = "imageSource", alias = "url")]
    pub image_source: String,
}

impl CaptionRequest {
    #[inline]
    pub fn new<T, B, S>(top_text: T, bottom_text: B, image_source: S) -> Self
        where T: Into<String>, B: Into<String>, S: Into<String>
    {
        CaptionRequest{
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
            image_source: image_source.into(),
        }
    }

    /// Whether there is any caption text to draw at all.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.top_text.trim().is_empty() || !self.bottom_text.trim().is_empty()
    }
}

impl fmt::Debug for CaptionRequest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("CaptionRequest");
        ds.field("image_source", &self.image_source);
        if !self.top_text.is_empty() {
            ds.field("top_text", &self.top_text);
        }
        if !self.bottom_text.is_empty() {
            ds.field("bottom_text", &self.bottom_text);
        }
        ds.finish()
    }
}
