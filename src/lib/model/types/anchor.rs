//! Module defining the caption anchor.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

use std::fmt;


macro_attr! {
    /// Edge of the canvas that a caption is anchored to.
    ///
    /// Captions grow away from their anchor: top captions downward,
    /// bottom captions upward.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(Anchors))]
    pub enum Anchor {
        /// Top edge (y = 0).
        Top,
        /// Bottom edge (y = canvas height).
        Bottom,
    }
}

impl Anchor {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
        }
    }

    /// Whether the caption grows upward from the bottom edge.
    #[inline]
    pub fn is_bottom(self) -> bool {
        self == Anchor::Bottom
    }

    /// Y coordinate of the anchor on a canvas of given height.
    #[inline]
    pub fn y_within(self, height: f32) -> f32 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Bottom => height,
        }
    }

    /// Vertical direction in which subsequent lines are stacked.
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            Anchor::Top => 1.0,
            Anchor::Bottom => -1.0,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}
