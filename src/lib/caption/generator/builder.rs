//! Module implementing the builder for `MemeGenerator`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use image::DynamicImage;
use thiserror::Error;

use crate::model::{CanvasConfig, FontConfig, FontWeight, Options, OutputFormat};
use crate::model::DEFAULT_FONT_DIRECTORY;
use crate::resources::{load_typeface, FontLoader, ImageLoadError, ImageLoader, Loader};
use crate::util::text::Typeface;
use super::config::Config;
use super::MemeGenerator;


/// Builder for `MemeGenerator`.
#[derive(Debug)]
#[must_use = "unused builder which must be used"]
pub struct Builder<Il = ImageLoader, Fl = FontLoader> {
    errors: Vec<BuildError>,

    canvas: CanvasConfig,
    font: FontConfig,
    format: OutputFormat,

    image_loader: Option<Il>,
    font_loader: Option<Fl>,
}

impl Builder<ImageLoader, FontLoader> {
    /// Create a new `Builder` with the standard image loader
    /// and fonts loaded from `DEFAULT_FONT_DIRECTORY`.
    #[inline]
    pub fn new() -> Self {
        Builder{
            image_loader: Some(ImageLoader::new()),
            font_loader: Some(FontLoader::new(DEFAULT_FONT_DIRECTORY)),
            ..Builder::default()
        }
    }
}
impl<Il, Fl> Default for Builder<Il, Fl> {
    /// Create a `Builder` with default configuration but no loaders.
    fn default() -> Self {
        Builder{
            errors: vec![],
            canvas: CanvasConfig::default(),
            font: FontConfig::default(),
            format: OutputFormat::default(),
            image_loader: None,
            font_loader: None,
        }
    }
}

// Setters.
impl<Il, Fl> Builder<Il, Fl> {
    /// Set the canvas configuration.
    #[inline]
    pub fn canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas; self
    }

    /// Set the canvas width & initial height.
    #[inline]
    pub fn canvas_size(self, width: u32, height: u32) -> Self {
        self.canvas(CanvasConfig::new(width, height))
    }

    /// Set the font configuration.
    #[inline]
    pub fn font(mut self, font: FontConfig) -> Self {
        self.font = font; self
    }

    #[inline]
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font.family = family.into(); self
    }

    #[inline]
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font.weight = Some(weight); self
    }

    /// Set the initial font size, in points.
    #[inline]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font.size = size; self
    }

    /// Set the line height, as a multiplier of the font size.
    #[inline]
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.font.line_height = line_height; self
    }

    /// Apply the groups of options that are present.
    pub fn options(mut self, options: Options) -> Self {
        if let Some(canvas) = options.canvas {
            self.canvas = canvas;
        }
        if let Some(font) = options.font {
            self.font = font;
        }
        self
    }

    /// Set the format of generated images.
    #[inline]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        match validate_format(format) {
            Ok(()) => { self.format = format; self }
            Err(e) => self.err(e),
        }
    }

    /// Generate JPEG images of given quality percentage.
    #[inline]
    pub fn jpeg_quality(self, quality: u8) -> Self {
        self.output_format(OutputFormat::Jpeg(quality))
    }

    /// Set a custom loader for the source images.
    pub fn image_loader<L>(self, loader: L) -> Builder<L, Fl> {
        Builder{
            errors: self.errors,
            canvas: self.canvas,
            font: self.font,
            format: self.format,
            image_loader: Some(loader),
            font_loader: self.font_loader,
        }
    }

    /// Set a custom loader for fonts.
    pub fn font_loader<L>(self, loader: L) -> Builder<Il, L> {
        Builder{
            errors: self.errors,
            canvas: self.canvas,
            font: self.font,
            format: self.format,
            image_loader: self.image_loader,
            font_loader: Some(loader),
        }
    }

    /// Set the directory where the fonts will be loaded from.
    #[inline]
    pub fn font_directory<P: AsRef<Path>>(self, directory: P) -> Builder<Il, FontLoader> {
        self.font_loader(FontLoader::new(directory))
    }
}

// Validation & building.
impl<Il, Fl> Builder<Il, Fl>
    where Il: Loader<Item=DynamicImage, Err=ImageLoadError>,
          Fl: Loader, Fl::Item: Typeface, Fl::Err: Into<Box<dyn Error + Send + Sync>>
{
    /// Build the `MemeGenerator`, loading the configured font.
    pub fn build(self) -> Result<MemeGenerator<Il, Fl>, BuildError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        validate_canvas(&self.canvas)?;
        validate_font(&self.font)?;

        let image_loader = self.image_loader.ok_or(BuildError::NoLoader("image"))?;
        let font_loader = self.font_loader.ok_or(BuildError::NoLoader("font"))?;
        let typeface = load_font(&font_loader, &self.font)?;

        let config = Config{canvas: self.canvas, font: self.font, format: self.format};
        debug!("Built meme generator with {:?}", config);
        Ok(MemeGenerator{
            config,
            image_loader: Arc::new(image_loader),
            font_loader: Arc::new(font_loader),
            typeface: Arc::new(typeface),
        })
    }
}

impl<Il, Fl> Builder<Il, Fl> {
    #[doc(hidden)]
    fn err(mut self, error: BuildError) -> Self {
        self.errors.push(error); self
    }
}


/// Error that resulted from misconfiguration of the `MemeGenerator`.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Canvas dimensions aren't positive.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Font size or line height aren't positive, or the family is blank.
    #[error("invalid font `{family}` of size {size}pt with line height {line_height}")]
    InvalidFont { family: String, size: f32, line_height: f32 },

    /// JPEG quality outside of the 1-100% range.
    #[error("invalid JPEG quality {0}%")]
    InvalidQuality(u8),

    /// No loader set up.
    #[error("no {0} loader configured")]
    NoLoader(&'static str),

    /// The configured font couldn't be loaded.
    #[error("cannot load font `{family}`: {cause}")]
    Font {
        family: String,
        #[source] cause: Box<dyn Error + Send + Sync>,
    },
}


// Utilities for validation & building.

pub(super) fn validate_canvas(canvas: &CanvasConfig) -> Result<(), BuildError> {
    if canvas.is_valid() {
        Ok(())
    } else {
        Err(BuildError::InvalidCanvas{width: canvas.width, height: canvas.height})
    }
}

pub(super) fn validate_font(font: &FontConfig) -> Result<(), BuildError> {
    if font.is_valid() {
        Ok(())
    } else {
        Err(BuildError::InvalidFont{
            family: font.family.clone(),
            size: font.size,
            line_height: font.line_height,
        })
    }
}

pub(super) fn validate_format(format: OutputFormat) -> Result<(), BuildError> {
    match format {
        OutputFormat::Jpeg(quality) if quality < 1 || quality > 100 =>
            Err(BuildError::InvalidQuality(quality)),
        _ => Ok(()),
    }
}

pub(super) fn load_font<L>(loader: &L, font: &FontConfig) -> Result<L::Item, BuildError>
    where L: Loader, L::Err: Into<Box<dyn Error + Send + Sync>>
{
    trace!("Loading font `{}` ({})...", font.family, font.weight());
    load_typeface(loader, font).map_err(|e| {
        let cause = e.into();
        error!("Cannot load font `{}`: {}", font.family, cause);
        BuildError::Font{family: font.family.clone(), cause}
    })
}
