use serde::{Deserialize, Serialize};

use crate::core::types::PlotView;

/// Fixed gap between adjacent bars, in CSS pixels.
pub const BAR_GAP_PX: f64 = 2.0;

/// Smallest rendered height for a strictly positive sample.
pub const MIN_VISIBLE_BAR_PX: f64 = 2.0;

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub gap_px: f64,
    pub min_bar_px: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            gap_px: BAR_GAP_PX,
            min_bar_px: MIN_VISIBLE_BAR_PX,
        }
    }
}

/// Projects a sample series into bars anchored on the axis zero line.
///
/// The baseline pixel comes from the coordinate map of value `0.0`, never
/// from a rectangle edge, so negative-capable axes keep correct bar
/// direction. Strictly positive samples whose computed height falls under
/// `min_bar_px` are forced to that height growing upward from the zero
/// line, keeping near-zero measurements visible.
#[must_use]
pub fn project_bars(
    values: &[f64],
    index_len: usize,
    view: PlotView,
    style: BarStyle,
) -> Vec<BarGeometry> {
    let n = values.len().min(index_len);
    if n == 0 {
        return Vec::new();
    }

    let bar_width = (view.rect.width / n as f64 - style.gap_px).max(1.0);
    let y_zero = view.value_to_pixel(0.0);

    let mut bars = Vec::with_capacity(n);
    for (i, &value) in values.iter().take(n).enumerate() {
        let x = view.index_to_pixel(i, n) - bar_width / 2.0;
        let y_value = view.value_to_pixel(value);
        let mut top = y_zero.min(y_value);
        let mut height = (y_zero - y_value).abs();

        if value > 0.0 && height < style.min_bar_px {
            height = style.min_bar_px;
            if y_value < y_zero {
                top = y_zero - height;
            }
        }

        bars.push(BarGeometry {
            x,
            y: top,
            width: bar_width,
            height,
        });
    }
    bars
}
