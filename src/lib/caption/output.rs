//! Defines the output of meme generation.

use std::ops::Deref;

use mime::{self, Mime};

use crate::model::OutputFormat;


/// Finished meme, as an encoded image.
#[derive(Clone, Debug)]
#[must_use = "unused meme output which must be used"]
pub struct MemeOutput {
    format: OutputFormat,
    bytes: Vec<u8>,
    dimensions: (u32, u32),
}

impl MemeOutput {
    #[inline]
    pub(super) fn new(format: OutputFormat, bytes: Vec<u8>, dimensions: (u32, u32)) -> Self {
        MemeOutput{format, bytes, dimensions}
    }
}

impl MemeOutput {
    /// Image format of the output.
    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Width & height of the meme image, in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Raw bytes of the output.
    ///
    /// See `MemeOutput::format` for how to interpret it.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The MIME type that matches output's format.
    pub fn mime_type(&self) -> Mime {
        match self.format {
            OutputFormat::Png => mime::IMAGE_PNG,
            OutputFormat::Jpeg(..) => mime::IMAGE_JPEG,
        }
    }
}

impl Deref for MemeOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<MemeOutput> for Vec<u8> {
    fn from(output: MemeOutput) -> Self {
        output.into_bytes()
    }
}
