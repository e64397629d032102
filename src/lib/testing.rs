//! Test helpers shared by multiple modules.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma, Rgb, RgbImage};

use crate::resources::Loader;
use crate::util::text::{Coverage, Typeface, VMetrics};


/// Monospace typeface which renders every non-whitespace character
/// as a solid block half as wide as the font size.
///
/// Ascent is 80% and descent 20% of the font size,
/// and the blocks span the ascent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockFace;

impl BlockFace {
    #[inline]
    pub fn advance(size: f32) -> f32 {
        size * 0.5
    }
}

impl Typeface for BlockFace {
    fn text_width(&self, s: &str, size: f32) -> f32 {
        s.chars().count() as f32 * Self::advance(size)
    }

    fn v_metrics(&self, size: f32) -> VMetrics {
        VMetrics{ascent: size * 0.8, descent: size * -0.2}
    }

    fn rasterize(&self, s: &str, size: f32) -> Coverage {
        let width = self.text_width(s, size).ceil() as u32;
        let height = size.ceil() as u32;
        let block_height = (size * 0.8).round() as u32;

        let mut mask = GrayImage::new(width.max(1), height.max(1));
        for (i, c) in s.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let start = (i as f32 * Self::advance(size)).round() as u32;
            let end = ((i + 1) as f32 * Self::advance(size)).round() as u32;
            for x in start..end.min(width) {
                for y in 0..block_height.min(height) {
                    mask.put_pixel(x, y, Luma([255]));
                }
            }
        }
        Coverage{mask, origin: (0, 0)}
    }

    fn has_glyph(&self, c: char) -> bool {
        c.is_ascii()
    }
}


/// Font loader that knows a fixed set of font names, all rendered as `BlockFace`.
#[derive(Clone, Debug)]
pub struct BlockFaceLoader {
    pub names: Vec<&'static str>,
}

impl BlockFaceLoader {
    pub fn new(names: &[&'static str]) -> Self {
        BlockFaceLoader{names: names.to_vec()}
    }
}

impl Loader for BlockFaceLoader {
    type Item = BlockFace;
    type Err = io::Error;

    fn load<'n>(&self, name: &'n str) -> Result<BlockFace, io::Error> {
        if self.names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            Ok(BlockFace)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, format!("no font `{}`", name)))
        }
    }
}


/// Family name of the TrueType font bundled for tests (DejaVu Sans).
pub const TEST_FONT: &str = "dejavu";

/// Directory containing `TEST_FONT`.
pub fn test_font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testing").join("fonts")
}


/// Create a solid color image of given size.
pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

/// Encode image as PNG bytes.
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut bytes = io::Cursor::new(vec![]);
    img.write_to(&mut bytes, ImageOutputFormat::Png).expect("encode PNG");
    bytes.into_inner()
}

/// Temporary directory unique to given test, created anew.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir()
        .join(format!("memegen-test-{}-{}", name, ::std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Write a solid color PNG image of given size to a temporary file.
pub fn image_file(test_name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = temp_dir(test_name).join("image.png");
    fs::write(&path, png_bytes(&solid_image(width, height, color))).expect("write image");
    path
}
