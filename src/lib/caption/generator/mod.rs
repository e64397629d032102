//! Module which defines the meme generator.

mod builder;
mod config;

pub use self::builder::{Builder, BuildError};
pub use self::config::Config;


use std::error::Error;
use std::fmt;
use std::sync::Arc;

use image::DynamicImage;

use crate::model::{Anchor, CanvasConfig, CaptionRequest, FontConfig, Options, OutputFormat};
use crate::resources::{FontLoader, ImageLoadError, ImageLoader, Loader};
use crate::util::text::Typeface;
use super::error::MemeError;
use super::layout::LineLayout;
use super::output::MemeOutput;
use super::task::{self, RenderTask};


/// Meme generator.
///
/// The generator holds the configuration and the typeface it was built with,
/// while every meme is drawn on a canvas of its own.
/// It is thus thread-safe (`Send + Sync`) if its loaders are.
///
/// *Note*: `MemeGenerator` implements `Clone`
/// by merely cloning shared references to the loaders & the typeface.
pub struct MemeGenerator<Il = ImageLoader, Fl = FontLoader>
    where Fl: Loader
{
    config: Config,
    image_loader: Arc<Il>,
    font_loader: Arc<Fl>,
    typeface: Arc<Fl::Item>,
}

// Constructors.
impl MemeGenerator<ImageLoader, FontLoader> {
    /// Create a generator with the default configuration,
    /// loading fonts from `DEFAULT_FONT_DIRECTORY`.
    ///
    /// For other ways of creating `MemeGenerator`, see the `GeneratorBuilder`.
    #[inline]
    pub fn new() -> Result<Self, BuildError> {
        Builder::new().build()
    }

    /// Create a generator with given options,
    /// loading fonts from `DEFAULT_FONT_DIRECTORY`.
    #[inline]
    pub fn with_options(options: Options) -> Result<Self, BuildError> {
        Builder::new().options(options).build()
    }

    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

// Meme generation.
impl<Il, Fl> MemeGenerator<Il, Fl>
    where Il: Loader<Item=DynamicImage, Err=ImageLoadError>,
          Fl: Loader, Fl::Item: Typeface
{
    /// Generate a meme described by the request.
    ///
    /// The source image is loaded from a local file if possible,
    /// and fetched over HTTP otherwise.
    pub fn generate_meme(&self, request: &CaptionRequest) -> Result<MemeOutput, MemeError> {
        debug!("Generating {:?}", request);
        let img = self.image_loader.load(&request.image_source)?;
        self.caption_image(img, &request.top_text, &request.bottom_text)
    }

    /// Generate a meme from the image source & caption texts.
    #[inline]
    pub fn generate<T, B, S>(&self, top_text: T, bottom_text: B,
                             image_source: S) -> Result<MemeOutput, MemeError>
        where T: Into<String>, B: Into<String>, S: Into<String>
    {
        self.generate_meme(&CaptionRequest::new(top_text, bottom_text, image_source))
    }

    /// Caption an image that has already been loaded.
    pub fn caption_image(&self, img: DynamicImage,
                         top_text: &str, bottom_text: &str) -> Result<MemeOutput, MemeError> {
        RenderTask::new(top_text, bottom_text, &self.config, &*self.typeface).perform(img)
    }

    /// Lay out caption text the way it would be drawn with current configuration,
    /// without drawing anything.
    ///
    /// Returns `None` if there is no text to draw.
    #[inline]
    pub fn fit_caption(&self, text: &str, anchor: Anchor) -> Option<LineLayout> {
        task::fit_text(&*self.typeface, text, anchor,
                       self.config.canvas.width, self.config.font.size)
    }
}

// Configuration.
impl<Il, Fl> MemeGenerator<Il, Fl>
    where Fl: Loader, Fl::Item: Typeface, Fl::Err: Into<Box<dyn Error + Send + Sync>>
{
    /// Change the canvas & font configuration.
    ///
    /// The typeface is only reloaded if the font family or weight changes.
    /// On error, the previous configuration stays in effect.
    pub fn configure(&mut self, canvas: CanvasConfig, font: FontConfig) -> Result<(), BuildError> {
        builder::validate_canvas(&canvas)?;
        builder::validate_font(&font)?;
        if !font.same_face_as(&self.config.font) {
            debug!("Switching font from `{}` ({}) to `{}` ({})",
                self.config.font.family, self.config.font.weight(),
                font.family, font.weight());
            self.typeface = Arc::new(builder::load_font(&*self.font_loader, &font)?);
        }
        self.config.canvas = canvas;
        self.config.font = font;
        Ok(())
    }

    /// Change the format of generated images.
    pub fn set_output_format(&mut self, format: OutputFormat) -> Result<(), BuildError> {
        builder::validate_format(format)?;
        self.config.format = format;
        Ok(())
    }
}
impl<Il, Fl: Loader> MemeGenerator<Il, Fl> {
    /// Current configuration of the generator.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn canvas(&self) -> &CanvasConfig {
        &self.config.canvas
    }

    #[inline]
    pub fn font(&self) -> &FontConfig {
        &self.config.font
    }

    /// The typeface captions are currently rendered with.
    #[inline]
    pub fn typeface(&self) -> &Fl::Item {
        &*self.typeface
    }
}

impl<Il, Fl: Loader> Clone for MemeGenerator<Il, Fl> {
    fn clone(&self) -> Self {
        MemeGenerator{
            config: self.config.clone(),
            image_loader: self.image_loader.clone(),
            font_loader: self.font_loader.clone(),
            typeface: self.typeface.clone(),
        }
    }
}

impl<Il, Fl: Loader> fmt::Debug for MemeGenerator<Il, Fl> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("MemeGenerator")
            .field("config", &self.config)
            .finish()
    }
}
