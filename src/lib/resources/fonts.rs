//! Module for loading fonts used to render captions.

use std::fmt;
use std::io;
use std::path::Path;

use image::{GrayImage, Luma};
use rusttype::{self, point, GlyphId, Scale};
use thiserror::Error;

use crate::model::FontConfig;
use crate::util::text::{Coverage, Typeface, VMetrics};
use super::Loader;
use super::filesystem::{BytesLoader, PathLoader};


pub const FILE_EXTENSION: &str = "ttf";


// Font that can be used to caption memes.
macro_attr! {
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyph(s))", self.glyph_count())
    }
}

impl Typeface for Font {
    fn text_width(&self, s: &str, size: f32) -> f32 {
        // Compute text width as the final X position of the "caret"
        // after laying out all the glyphs, starting from X=0.
        self.layout(s, Scale::uniform(size), point(0.0, /* unused */ 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    fn v_metrics(&self, size: f32) -> VMetrics {
        let v_metrics = self.0.v_metrics(Scale::uniform(size));
        VMetrics{ascent: v_metrics.ascent, descent: v_metrics.descent}
    }

    fn rasterize(&self, s: &str, size: f32) -> Coverage {
        let scale = Scale::uniform(size);
        let v_metrics = self.0.v_metrics(scale);
        let glyphs: Vec<_> = self.layout(s, scale, point(0.0, v_metrics.ascent)).collect();

        // Glyphs can overhang the layout box (e.g. italic or swashy letters),
        // so the mask has to cover the union of both.
        let width = self.text_width(s, size).ceil() as i32;
        let height = (v_metrics.ascent - v_metrics.descent).ceil() as i32;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, width, height);
        for bb in glyphs.iter().filter_map(|g| g.pixel_bounding_box()) {
            min_x = min_x.min(bb.min.x);
            min_y = min_y.min(bb.min.y);
            max_x = max_x.max(bb.max.x);
            max_y = max_y.max(bb.max.y);
        }

        let mut mask = GrayImage::new((max_x - min_x).max(1) as u32,
                                      (max_y - min_y).max(1) as u32);
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    let x = (bb.min.x + x as i32 - min_x) as u32;
                    let y = (bb.min.y + y as i32 - min_y) as u32;
                    let alpha = (v * 255f32).round().min(255.0) as u8;
                    // Overlapping glyphs (e.g. due to kerning) keep the higher coverage.
                    let Luma([current]) = *mask.get_pixel(x, y);
                    if alpha > current {
                        mask.put_pixel(x, y, Luma([alpha]));
                    }
                });
            }
        }

        Coverage{mask, origin: (-min_x, -min_y)}
    }

    fn has_glyph(&self, c: char) -> bool {
        self.glyph(c).id() != GlyphId(0)
    }
}


/// Error while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// Font file couldn't be found or read.
    #[error("cannot read font file: {0}")]
    Io(#[from] io::Error),
    /// Font file isn't a valid TrueType font.
    #[error("invalid font file for `{0}`")]
    Invalid(String),
}


/// Loader of TrueType fonts from a directory.
///
/// Font names are the file stems, e.g. `"impact"` for `Impact.ttf`.
#[derive(Clone, Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                PathLoader::for_extension(directory, FILE_EXTENSION))
        }
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        self.inner.directory()
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load<'n>(&self, name: &'n str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name)?;
        match rusttype::Font::try_from_vec(bytes) {
            Some(font) => {
                debug!("Font `{}` loaded successfully", name);
                Ok(font.into())
            }
            None => {
                error!("Font file for `{}` resource is not a valid TrueType font", name);
                Err(FontError::Invalid(name.to_owned()))
            }
        }
    }
}


/// Load the typeface that matches given font configuration.
///
/// For any weight other than regular, a dedicated font file named
/// `<family>-<weight>` is tried first. If there is none,
/// the family's regular font file is used instead.
pub(crate) fn load_typeface<L: Loader>(loader: &L, font: &FontConfig) -> Result<L::Item, L::Err> {
    let weight = font.weight();
    if !weight.is_regular() {
        let name = format!("{}-{}", font.family, weight);
        match loader.load(&name) {
            Ok(face) => return Ok(face),
            Err(_) => warn!("No dedicated font file for `{}`, falling back to `{}`",
                name, font.family),
        }
    }
    loader.load(&font.family)
}
