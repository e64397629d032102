//! Module implementing the fitting of caption text onto the canvas.
//!
//! Text is wrapped greedily at spaces, and the font is shrunk
//! until the caption spans no more than `MAX_CAPTION_LINES` lines.

use std::mem;

use crate::model::{Anchor, FONT_SHRINK_FACTOR, MAX_CAPTION_LINES, MAX_FONT_SHRINK_STEPS, MIN_FONT_SIZE};


/// Caption text broken into lines, along with the font size that makes it fit.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    /// Lines in reading order (first line is the topmost one when drawn).
    lines: Vec<String>,
    /// Font size (in points) that the lines were measured with.
    font_size: f32,
    anchor: Anchor,
}

impl LineLayout {
    /// Lines of the caption in reading order.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Final font size of the caption, in points.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Distance between subsequent lines, given the line height multiplier.
    ///
    /// The font size number is used directly as pixels here,
    /// the same way the stroke width is derived from it.
    #[inline]
    pub fn line_height(&self, multiplier: f32) -> f32 {
        multiplier * self.font_size
    }

    /// Iterate over lines in the order they're drawn,
    /// i.e. starting with the one closest to the anchor edge.
    pub fn iter_from_anchor<'l>(&'l self) -> Box<dyn Iterator<Item=&'l str> + 'l> {
        let lines = self.lines.iter().map(|l| l.as_str());
        match self.anchor {
            Anchor::Top => Box::new(lines),
            Anchor::Bottom => Box::new(lines.rev()),
        }
    }

    /// Vertical positions of the lines when the anchor edge is at `anchor_y`.
    ///
    /// Returned pairs are in drawing order (see `iter_from_anchor`).
    pub fn positions(&self, anchor_y: f32, line_height: f32) -> Vec<(&str, f32)> {
        let direction = self.anchor.direction();
        self.iter_from_anchor().enumerate()
            .map(|(k, line)| (line, anchor_y + direction * line_height * k as f32))
            .collect()
    }
}


/// Break the text into lines no wider than `max_width`, wrapping at spaces.
///
/// A word that is too wide on its own still gets a line to itself.
/// Spaces at the wrapping points are dropped, all the others are kept.
pub fn wrap_words<F>(text: &str, max_width: f32, width_of: F) -> Vec<String>
    where F: Fn(&str) -> f32
{
    let mut lines = vec![];
    let mut line = String::new();
    for word in text.split(' ') {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if width_of(&candidate) > max_width {
            lines.push(mem::replace(&mut line, word.to_owned()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Fit the caption text within the canvas width.
///
/// `width_at` measures a single line of text at given font size (in points).
/// Starting from `base_size`, the font is shrunk by `FONT_SHRINK_FACTOR`
/// until the text fits in `MAX_CAPTION_LINES` lines.
/// If it doesn't fit even at `MIN_FONT_SIZE`, the layout at that size is used anyway.
///
/// Returns `None` if there is no text to draw.
pub fn fit_caption<F>(text: &str, anchor: Anchor,
                      max_width: f32, base_size: f32, width_at: F) -> Option<LineLayout>
    where F: Fn(&str, f32) -> f32
{
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut size = base_size;
    let mut steps = 0;
    loop {
        let lines = wrap_words(text, max_width, |s| width_at(s, size));
        trace!("Caption {:?} spans {} line(s) at {}pt", text, lines.len(), size);
        if lines.len() <= MAX_CAPTION_LINES {
            return Some(LineLayout{lines, font_size: size, anchor});
        }

        let next_size = (size * FONT_SHRINK_FACTOR).max(MIN_FONT_SIZE);
        if next_size >= size || steps >= MAX_FONT_SHRINK_STEPS {
            warn!("Caption {:?} doesn't fit in {} lines even at {}pt, drawing {} lines",
                text, MAX_CAPTION_LINES, size, lines.len());
            return Some(LineLayout{lines, font_size: size, anchor});
        }
        debug!("Shrinking {} caption font from {}pt to {}pt",
            anchor, size, next_size);
        size = next_size;
        steps += 1;
    }
}
