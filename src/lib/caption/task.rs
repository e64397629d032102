//! Module implementing the actual rendering of a meme.
//! Most if not all drawing logic lives here.

use std::io::Cursor;

use image::{DynamicImage, GenericImageView, RgbaImage};
use image::imageops::FilterType;

use crate::model::{Anchor, OutputFormat, OUTLINE_COLOR, OUTLINE_WIDTH_RATIO, TEXT_COLOR};
use crate::util::text::{self, points_to_pixels, Style, Typeface};
use super::error::MemeError;
use super::generator::Config;
use super::layout::{fit_caption, LineLayout};
use super::output::MemeOutput;


/// Represents a single meme rendering and contains all the relevant logic.
///
/// Every task draws onto its own canvas, so any number of them
/// can be performed at the same time with a shared config & typeface.
pub(super) struct RenderTask<'t, T: Typeface + ?Sized + 't> {
    top_text: &'t str,
    bottom_text: &'t str,
    config: &'t Config,
    typeface: &'t T,
}

/// Single line of caption text, positioned on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct TextRun {
    pub text: String,
    /// Horizontal center & the y coordinate of the edge given by `anchor`.
    pub position: (f32, f32),
    pub anchor: Anchor,
    /// Font size in points.
    pub font_size: f32,
    /// Width of the text outline in pixels.
    /// Derived from the configured font size, so it doesn't shrink with the text.
    pub outline_width: f32,
}

impl<'t, T: Typeface + ?Sized> RenderTask<'t, T> {
    #[inline]
    pub fn new(top_text: &'t str, bottom_text: &'t str,
               config: &'t Config, typeface: &'t T) -> Self {
        RenderTask{top_text, bottom_text, config, typeface}
    }
}

impl<'t, T: Typeface + ?Sized> RenderTask<'t, T> {
    /// Perform the rendering task on given source image.
    pub fn perform(self, img: DynamicImage) -> Result<MemeOutput, MemeError> {
        let (width, height) = self.config.canvas.fit_image(img.dimensions());
        let mut canvas = self.draw_image(img, width, height);

        for run in self.text_runs(width, height) {
            self.draw_run(&mut canvas, &run);
        }

        let bytes = self.encode(canvas)?;
        Ok(MemeOutput::new(self.config.format, bytes, (width, height)))
    }

    /// Scale the source image to cover the whole canvas.
    fn draw_image(&self, img: DynamicImage, width: u32, height: u32) -> RgbaImage {
        let (orig_width, orig_height) = img.dimensions();
        if (orig_width, orig_height) == (width, height) {
            debug!("Using original image size of {}x{}", orig_width, orig_height);
            return img.into_rgba8();
        }
        debug!("Resizing image from {}x{} to {}x{}",
            orig_width, orig_height, width, height);
        img.resize_exact(width, height, FilterType::Lanczos3).into_rgba8()
    }

    /// Lay out both captions on a canvas of given size.
    ///
    /// Runs are returned in drawing order: top caption first,
    /// and within a caption starting from the line closest to the edge.
    pub fn text_runs(&self, width: u32, height: u32) -> Vec<TextRun> {
        let mut runs = vec![];
        let outline_width = OUTLINE_WIDTH_RATIO * self.config.font.size;
        for &(text, anchor) in [(self.top_text, Anchor::Top),
                                (self.bottom_text, Anchor::Bottom)].iter() {
            let name = anchor.as_str();
            let layout = match fit_text(self.typeface, text, anchor,
                                        width, self.config.font.size) {
                Some(layout) => layout,
                None => { debug!("Empty {} caption, skipping.", name); continue; }
            };
            debug!("Rendering {} caption in {} line(s) at {}pt: {:?}",
                name, layout.line_count(), layout.font_size(), text);
            text::check(self.typeface, text);

            let x = width as f32 / 2.0;
            let line_height = layout.line_height(self.config.font.line_height);
            for (line, y) in layout.positions(anchor.y_within(height as f32), line_height) {
                runs.push(TextRun{
                    text: line.to_owned(),
                    position: (x, y),
                    anchor,
                    font_size: layout.font_size(),
                    outline_width,
                });
            }
        }
        runs
    }

    fn draw_run(&self, canvas: &mut RgbaImage, run: &TextRun) {
        trace!("Drawing {:?}", run);
        let style = Style::new(run.font_size, TEXT_COLOR)
            .with_outline(OUTLINE_COLOR, run.outline_width);
        text::render_line(canvas, self.typeface, &run.text, run.position, run.anchor, &style);
    }

    /// Encode final result as bytes of the configured image format.
    fn encode(&self, canvas: RgbaImage) -> Result<Vec<u8>, MemeError> {
        let format = self.config.format;
        debug!("Encoding final image as {:?}...", format);

        let img = match format {
            OutputFormat::Png => DynamicImage::ImageRgba8(canvas),
            // JPEG has no alpha channel.
            OutputFormat::Jpeg(..) => DynamicImage::ImageRgb8(
                DynamicImage::ImageRgba8(canvas).into_rgb8()),
        };
        let mut result = Cursor::new(vec![]);
        img.write_to(&mut result, format).map_err(MemeError::Encode)?;
        Ok(result.into_inner())
    }
}


/// Fit caption text within given canvas width, measuring it with the typeface.
pub(super) fn fit_text<T: Typeface + ?Sized>(face: &T, text: &str, anchor: Anchor,
                                             max_width: u32, base_size: f32) -> Option<LineLayout> {
    fit_caption(text, anchor, max_width as f32, base_size,
                |s, size| face.text_width(s, points_to_pixels(size)))
}
