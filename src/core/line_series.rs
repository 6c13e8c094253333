use serde::{Deserialize, Serialize};

use crate::core::types::PlotView;

/// Stroke width used for all line series.
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Projected polyline vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolyPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects a sample series into polyline vertices.
///
/// The point count is `min(index_len, values.len())`; x spans the full
/// rectangle width via the index map and y is clamped one pixel inside the
/// rectangle's vertical bounds so the stroke never escapes the frame.
/// Vertices carry the half-pixel offset for crisp strokes.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// same geometry.
#[must_use]
pub fn project_polyline(values: &[f64], index_len: usize, view: PlotView) -> Vec<PolyPoint> {
    let n = values.len().min(index_len);
    if n == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(n);
    for (i, &value) in values.iter().take(n).enumerate() {
        let x = view.index_to_pixel(i, n);
        let y_raw = view.value_to_pixel(value);
        let y = y_raw.clamp(view.rect.y + 1.0, view.rect.bottom() - 1.0);
        points.push(PolyPoint {
            x: x + 0.5,
            y: y + 0.5,
        });
    }
    points
}
