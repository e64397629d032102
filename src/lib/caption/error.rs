//! Meme generation error.

use image::ImageError;
use thiserror::Error;

use crate::resources::ImageLoadError;


/// Error that may occur while generating a meme.
#[derive(Debug, Error)]
pub enum MemeError {
    /// The source image couldn't be acquired, locally or over HTTP.
    #[error(transparent)]
    ImageLoad(#[from] ImageLoadError),

    /// The finished image couldn't be encoded.
    #[error("cannot encode the meme image: {0}")]
    Encode(#[source] ImageError),
}

impl MemeError {
    /// Whether the error is due to the source image not being available.
    #[inline]
    pub fn is_image_load(&self) -> bool {
        match *self {
            MemeError::ImageLoad(..) => true,
            _ => false,
        }
    }
}
