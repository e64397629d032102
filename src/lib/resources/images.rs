//! Module implementing the acquisition of source images.
//!
//! An image source is first tried as a local file, and only if that fails
//! is it fetched over HTTP.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use image::{self, DynamicImage, GenericImageView};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use super::Loader;
use super::filesystem::read_file;


const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));


/// Loader for the content of local files.
///
/// Resource names are file paths, either absolute or relative
/// to the current directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalLoader;

impl Loader for LocalLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    fn load<'n>(&self, path: &'n str) -> Result<Self::Item, Self::Err> {
        let path = Path::new(path);
        let stat = fs::metadata(path)?;
        if !stat.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display())));
        }
        read_file(path)
    }
}


/// Error while fetching a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request couldn't be made or the response couldn't be read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Server responded with a status other than 200 OK.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Loader for resources available over HTTP(S).
///
/// Resource names are absolute URLs.
/// Only a `200 OK` response is considered successful.
///
/// By default, requests have no timeout.
#[derive(Clone, Debug, Default)]
pub struct HttpLoader {
    timeout: Option<Duration>,
}

impl HttpLoader {
    #[inline]
    pub fn new() -> Self {
        HttpLoader::default()
    }

    /// Create a loader whose requests time out after given duration.
    #[inline]
    pub fn with_timeout(timeout: Duration) -> Self {
        HttpLoader{timeout: Some(timeout)}
    }
}

impl Loader for HttpLoader {
    type Item = Vec<u8>;
    type Err = FetchError;

    fn load<'n>(&self, url: &'n str) -> Result<Self::Item, Self::Err> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        trace!("GET {}", url);
        let response = client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("GET {} responded with HTTP {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes()?;
        debug!("Fetched {} byte(s) from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}


/// Error when the source image couldn't be obtained,
/// neither from a local file nor over the network.
#[derive(Debug, Error)]
#[error("The image could not be loaded.")]
pub struct ImageLoadError {
    image_source: String,
    #[source]
    reason: LoadCause,
}

impl ImageLoadError {
    #[inline]
    pub fn new<S: Into<String>>(image_source: S, reason: LoadCause) -> Self {
        ImageLoadError{image_source: image_source.into(), reason}
    }

    /// The image source (path or URL) that couldn't be loaded.
    #[inline]
    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    /// What went wrong while fetching the image from the network.
    #[inline]
    pub fn reason(&self) -> &LoadCause {
        &self.reason
    }
}

/// Underlying reason of an `ImageLoadError`.
#[derive(Debug, Error)]
pub enum LoadCause {
    /// Image couldn't be fetched.
    #[error("failed to fetch the image: {0}")]
    Fetch(#[source] Box<dyn Error + Send + Sync>),
    /// Fetched bytes aren't an image in any supported format.
    #[error("failed to decode the image: {0}")]
    Decode(#[source] image::ImageError),
}


/// Loader of the source images for memes.
///
/// The image source is tried as a local file first.
/// If that fails for any reason (including the source not being a path at all),
/// it is fetched from the network as a URL. Only failures of the latter
/// are reported, as an `ImageLoadError`.
#[derive(Clone, Debug, Default)]
pub struct ImageLoader<Ll = LocalLoader, Rl = HttpLoader> {
    local: Ll,
    remote: Rl,
}

impl ImageLoader<LocalLoader, HttpLoader> {
    #[inline]
    pub fn new() -> Self {
        ImageLoader::default()
    }
}

impl<Ll, Rl> ImageLoader<Ll, Rl>
    where Ll: Loader<Item=Vec<u8>>, Rl: Loader<Item=Vec<u8>>
{
    /// Create an `ImageLoader` with custom loaders for the local & remote stage.
    #[inline]
    pub fn with_loaders(local: Ll, remote: Rl) -> Self {
        ImageLoader{local, remote}
    }
}

impl<Ll, Rl> ImageLoader<Ll, Rl>
    where Ll: Loader<Item=Vec<u8>>, Ll::Err: fmt::Display,
          Rl: Loader<Item=Vec<u8>>, Rl::Err: Into<Box<dyn Error + Send + Sync>>
{
    /// Try to load & decode the image from a local file.
    pub fn try_local(&self, source: &str) -> Option<DynamicImage> {
        let bytes = match self.local.load(source) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Image source `{}` is not a readable local file: {}", source, e);
                return None;
            }
        };
        match image::load_from_memory(&bytes) {
            Ok(img) => {
                debug!("Loaded {}x{} image from local file {}",
                    img.width(), img.height(), source);
                Some(img)
            }
            Err(e) => {
                debug!("Local file {} is not a valid image: {}", source, e);
                None
            }
        }
    }

    /// Fetch the image from given URL & decode it.
    pub fn fetch_remote(&self, source: &str) -> Result<DynamicImage, ImageLoadError> {
        let bytes = self.remote.load(source).map_err(|e| {
            let e = e.into();
            error!("Failed to fetch image from `{}`: {}", source, e);
            ImageLoadError::new(source, LoadCause::Fetch(e))
        })?;
        let img = image::load_from_memory(&bytes).map_err(|e| {
            error!("Image fetched from `{}` cannot be decoded: {}", source, e);
            ImageLoadError::new(source, LoadCause::Decode(e))
        })?;
        debug!("Loaded {}x{} image from {}", img.width(), img.height(), source);
        Ok(img)
    }
}

impl<Ll, Rl> Loader for ImageLoader<Ll, Rl>
    where Ll: Loader<Item=Vec<u8>>, Ll::Err: fmt::Display,
          Rl: Loader<Item=Vec<u8>>, Rl::Err: Into<Box<dyn Error + Send + Sync>>
{
    type Item = DynamicImage;
    type Err = ImageLoadError;

    fn load<'n>(&self, source: &'n str) -> Result<Self::Item, Self::Err> {
        if let Some(img) = self.try_local(source) {
            return Ok(img);
        }
        debug!("Falling back to fetching `{}` over the network", source);
        self.fetch_remote(source)
    }
}
