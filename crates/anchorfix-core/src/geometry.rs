#![forbid(unsafe_code)]

//! Scroll and banner geometry in CSS pixels.

/// A window scroll position in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    /// Horizontal offset (`window.scrollX`).
    pub x: f64,
    /// Vertical offset (`window.scrollY`).
    pub y: f64,
}

impl ScrollPosition {
    /// The document origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a scroll position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same position shifted up by `offset` pixels, x unchanged.
    #[must_use]
    pub fn shifted_up(self, offset: f64) -> Self {
        Self {
            x: self.x,
            y: self.y - offset,
        }
    }
}

/// The banner element's layout box, re-read from the host on every
/// correction. Never cached; layout may change between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BannerMetrics {
    /// Vertical offset of the banner's top edge.
    pub top: f64,
    /// Rendered height including margins (`outerHeight(true)`).
    pub outer_height: f64,
}

impl BannerMetrics {
    /// Create banner metrics.
    #[must_use]
    pub const fn new(top: f64, outer_height: f64) -> Self {
        Self { top, outer_height }
    }

    /// The banner's bottom edge: the amount of content it covers and the
    /// offset every correction subtracts from the native jump position.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.outer_height
    }
}
