//! Module responsible for rendering text.

use std::collections::BTreeSet;
use std::fmt;

use image::{GrayImage, Pixel, RgbaImage};

use crate::model::{Anchor, Color};


/// Number of pixels in a typographic point (at the usual 96 DPI).
const PIXELS_PER_POINT: f32 = 96.0 / 72.0;

/// Convert font size in points to font size in pixels.
#[inline]
pub fn points_to_pixels(points: f32) -> f32 {
    points * PIXELS_PER_POINT
}


/// Vertical metrics of a typeface at a particular size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VMetrics {
    /// Distance from the baseline to the top of the em box.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the em box.
    /// This is usually negative.
    pub descent: f32,
}

impl VMetrics {
    #[inline]
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}


/// Rasterized text, as a coverage (alpha) mask.
#[derive(Clone, Debug)]
pub struct Coverage {
    /// Coverage of the glyph pixels (0 = empty, 255 = fully covered).
    pub mask: GrayImage,
    /// Position within the mask of the top-left corner of the text's layout box,
    /// i.e. of the caret start at the top of the em box.
    ///
    /// Glyphs may overhang the layout box, which is why this isn't always (0, 0).
    pub origin: (i32, i32),
}


/// A typeface that captions can be measured & rasterized with.
///
/// All sizes here are in pixels.
pub trait Typeface {
    /// Width of the text laid out as a single line.
    fn text_width(&self, s: &str, size: f32) -> f32;

    /// Vertical metrics at given size.
    fn v_metrics(&self, size: f32) -> VMetrics;

    /// Rasterize the text laid out as a single line.
    fn rasterize(&self, s: &str, size: f32) -> Coverage;

    /// Whether the typeface has a glyph for given character.
    fn has_glyph(&self, _c: char) -> bool {
        true
    }
}


/// Check if given typeface has all the glyphs for given text.
pub fn check<T: Typeface + ?Sized>(face: &T, text: &str) {
    let missing: BTreeSet<_> = text.chars()
        .filter(|c| !c.is_whitespace() && !face.has_glyph(*c))
        .map(|c| c as u32)
        .collect();
    if !missing.is_empty() {
        warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
            missing.into_iter().map(|c| format!("{:#x}", c)).collect::<Vec<_>>().join(", "));
    }
}


/// Style that the text is rendered with.
#[derive(Clone, Copy)]
pub struct Style {
    /// Font size in points.
    size: f32,
    color: Color,
    outline: Option<(Color, f32)>,
}

impl Style {
    #[inline]
    pub fn new(size: f32, color: Color) -> Self {
        debug_assert!(size > 0.0, "text::Style got non-positive size ({})", size);
        Style{size, color, outline: None}
    }

    /// Stroke the text outline with given color & line width (in pixels)
    /// before filling it.
    #[inline]
    pub fn with_outline(self, color: Color, width: f32) -> Self {
        Style{outline: Some((color, width)), ..self}
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn pixel_size(&self) -> f32 {
        points_to_pixels(self.size)
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("Style");
        ds.field("size", &self.size);
        ds.field("color", &format!("{}", self.color));
        if let Some((color, width)) = self.outline {
            ds.field("outline", &format!("{} {}px", color, width));
        }
        ds.finish()
    }
}


/// Renders a line of text onto given image.
///
/// The text is centered horizontally on `x`.
/// With `Anchor::Top`, the top of the em box is placed at `y`;
/// with `Anchor::Bottom`, its bottom is.
///
/// Text should be single-line and short enough to fit (or it will be clipped).
pub fn render_line<T: Typeface + ?Sized>(img: &mut RgbaImage,
                                         face: &T,
                                         s: &str,
                                         (x, y): (f32, f32), baseline: Anchor,
                                         style: &Style) {
    trace!("render_line(..., {:?}, ({}, {}), {:?}, {:?})", s, x, y, baseline, style);

    let size = style.pixel_size();
    let width = face.text_width(s, size);
    let v_metrics = face.v_metrics(size);

    // Figure out where the top-left corner of the layout box should go.
    let left = x - width / 2.0;
    let top = match baseline {
        Anchor::Top => y,
        Anchor::Bottom => y - v_metrics.height(),
    };
    let position = (left.round() as i32, top.round() as i32);

    let coverage = face.rasterize(s, size);
    if let Some((outline_color, outline_width)) = style.outline {
        // The stroke is centered on the glyph contours,
        // so only half of it extends outside of them.
        let stroke = dilate(&coverage, outline_width / 2.0);
        blend_coverage(img, &stroke, position, outline_color);
    }
    blend_coverage(img, &coverage, position, style.color);
}


// Utility functions

/// Blend a solid color onto the image through a coverage mask
/// whose layout box has its top-left corner at `position`.
fn blend_coverage(img: &mut RgbaImage, coverage: &Coverage,
                  position: (i32, i32), color: Color) {
    let (width, height) = img.dimensions();
    let (left, top) = (position.0 - coverage.origin.0, position.1 - coverage.origin.1);
    for (mx, my, alpha) in coverage.mask.enumerate_pixels() {
        let alpha = alpha[0];
        if alpha == 0 {
            continue;
        }
        let x = left + mx as i32;
        let y = top + my as i32;
        if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
            continue;
        }
        img.get_pixel_mut(x as u32, y as u32).blend(&color.to_rgba(alpha));
    }
}

/// Grow the covered area of the mask by given radius (in pixels),
/// in the same way as stroking the contours with twice that line width would.
fn dilate(coverage: &Coverage, radius: f32) -> Coverage {
    if !(radius >= 0.5) {
        return coverage.clone();
    }

    let r = radius.ceil() as i32;
    let offsets: Vec<(i32, i32)> = (-r..=r)
        .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| ((dx * dx + dy * dy) as f32) <= radius * radius)
        .collect();

    let (width, height) = coverage.mask.dimensions();
    let mut mask = GrayImage::new(width + 2 * r as u32, height + 2 * r as u32);
    for (x, y, value) in coverage.mask.enumerate_pixels() {
        let value = value[0];
        if value == 0 {
            continue;
        }
        for &(dx, dy) in &offsets {
            let target = mask.get_pixel_mut((x as i32 + r + dx) as u32,
                                            (y as i32 + r + dy) as u32);
            if target[0] < value {
                target[0] = value;
            }
        }
    }

    Coverage{mask, origin: (coverage.origin.0 + r, coverage.origin.1 + r)}
}


#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    use crate::model::{Anchor, Color};
    use crate::testing::BlockFace;
    use super::{Coverage, Style, dilate, points_to_pixels, render_line};

    #[test]
    fn points_are_larger_than_pixels() {
        assert_eq!(40.0, points_to_pixels(30.0));
    }

    #[test]
    fn dilate_single_pixel() {
        let mut mask = GrayImage::new(1, 1);
        mask.put_pixel(0, 0, Luma([255]));
        let dilated = dilate(&Coverage{mask, origin: (0, 0)}, 1.0);

        assert_eq!((3, 3), dilated.mask.dimensions());
        assert_eq!((1, 1), dilated.origin);
        // Plus-shaped, since the corners are farther than the radius.
        assert_eq!(255, dilated.mask.get_pixel(1, 1)[0]);
        assert_eq!(255, dilated.mask.get_pixel(0, 1)[0]);
        assert_eq!(255, dilated.mask.get_pixel(1, 0)[0]);
        assert_eq!(0, dilated.mask.get_pixel(0, 0)[0]);
        assert_eq!(0, dilated.mask.get_pixel(2, 2)[0]);
    }

    #[test]
    fn dilate_tiny_radius_is_noop() {
        let mask = GrayImage::from_pixel(2, 2, Luma([128]));
        let dilated = dilate(&Coverage{mask: mask.clone(), origin: (0, 0)}, 0.2);
        assert_eq!(mask, dilated.mask);
    }

    #[test]
    fn render_top_line_is_centered() {
        let mut img = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 255]));
        let style = Style::new(7.5, Color::white());  // 10px
        render_line(&mut img, &BlockFace, "ab", (50.0, 0.0), Anchor::Top, &style);

        // Two 5px wide blocks centered on x = 50, from the top edge.
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(45, 0));
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(54, 7));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(44, 0));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(55, 0));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(50, 20));
    }

    #[test]
    fn render_bottom_line_sits_on_edge() {
        let mut img = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 255]));
        let style = Style::new(7.5, Color::white());  // 10px
        render_line(&mut img, &BlockFace, "a", (50.0, 50.0), Anchor::Bottom, &style);

        // The block spans the ascent (8px) of the 10px em box ending at y = 50.
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(50, 40));
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(50, 47));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(50, 39));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(50, 48));
    }

    #[test]
    fn render_with_outline() {
        let mut img = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 255, 255]));
        let style = Style::new(7.5, Color::white()).with_outline(Color::black(), 4.0);
        render_line(&mut img, &BlockFace, "a", (50.0, 10.0), Anchor::Top, &style);

        // Fill stays white, the 2px just outside of the glyph are black.
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(50, 12));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(46, 12));
        assert_eq!(Rgba([0, 0, 0, 255]), *img.get_pixel(52, 9));
        assert_eq!(Rgba([0, 0, 255, 255]), *img.get_pixel(44, 12));
    }

    #[test]
    fn render_clips_at_edges() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let style = Style::new(30.0, Color::white()).with_outline(Color::black(), 8.0);
        render_line(&mut img, &BlockFace, "wide", (2.0, 2.0), Anchor::Top, &style);
        assert_eq!(Rgba([255, 255, 255, 255]), *img.get_pixel(3, 3));
    }
}
