use serde::{Deserialize, Serialize};

use crate::core::scale::lin_map;

/// Plot rectangle in CSS-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Plot rectangle bound to a vertical axis range.
///
/// This is the view consumed by the series projections: the horizontal axis
/// maps sample indices across the full rectangle width and the vertical axis
/// maps `[y_min, y_max]` onto inverted pixel Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotView {
    pub rect: PlotRect,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotView {
    #[must_use]
    pub const fn new(rect: PlotRect, y_min: f64, y_max: f64) -> Self {
        Self { rect, y_min, y_max }
    }

    /// Maps a data value to pixel Y. Data grows upward, pixels grow downward.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        lin_map(value, self.y_min, self.y_max, self.rect.bottom(), self.rect.y)
    }

    /// Maps a sample index in `0..n` to pixel X across the rectangle width.
    #[must_use]
    pub fn index_to_pixel(self, index: usize, n: usize) -> f64 {
        let last = n.saturating_sub(1) as f64;
        lin_map(index as f64, 0.0, last, self.rect.x, self.rect.right())
    }
}
