//! Module defining the output image format.

use image::ImageOutputFormat;

use crate::model::constants::DEFAULT_JPEG_QUALITY;


/// Image format that finished memes are encoded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Lossless PNG, with alpha channel preserved.
    Png,
    /// JPEG of given quality (in %).
    Jpeg(u8),
}

impl OutputFormat {
    /// JPEG with the default quality.
    #[inline]
    pub fn jpeg() -> Self {
        OutputFormat::Jpeg(DEFAULT_JPEG_QUALITY)
    }

    /// Usual file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg(..) => "jpg",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Png
    }
}

impl From<OutputFormat> for ImageOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ImageOutputFormat::Png,
            OutputFormat::Jpeg(quality) => ImageOutputFormat::Jpeg(quality),
        }
    }
}
