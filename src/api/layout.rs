use chrono::{DateTime, Utc};

use crate::core::types::PlotRect;
use crate::render::Surface;

/// Fixed plot padding in CSS pixels: room for Y labels on the left and date
/// labels underneath.
pub const PADDING_LEFT_PX: f64 = 56.0;
pub const PADDING_RIGHT_PX: f64 = 12.0;
pub const PADDING_TOP_PX: f64 = 16.0;
pub const PADDING_BOTTOM_PX: f64 = 44.0;

/// Target horizontal spacing between date labels.
pub const X_LABEL_TARGET_SPACING_PX: f64 = 90.0;

/// Lower bound on the number of date labels shown.
pub const X_LABEL_MIN_COUNT: usize = 3;

/// Plot rectangle inside the fixed padding. The surface's enforced minimum
/// client size keeps the result non-degenerate, but both axes are still
/// floored at one pixel.
#[must_use]
pub fn plot_rect(surface: Surface) -> PlotRect {
    let (width, height) = surface.css_size();
    PlotRect::new(
        PADDING_LEFT_PX,
        PADDING_TOP_PX,
        (width - PADDING_LEFT_PX - PADDING_RIGHT_PX).max(1.0),
        (height - PADDING_TOP_PX - PADDING_BOTTOM_PX).max(1.0),
    )
}

/// Maximum number of date labels that fit a plot width without overlap.
#[must_use]
pub fn max_x_labels(plot_width: f64) -> usize {
    if !plot_width.is_finite() || plot_width <= 0.0 {
        return X_LABEL_MIN_COUNT;
    }
    ((plot_width / X_LABEL_TARGET_SPACING_PX).floor() as usize).max(X_LABEL_MIN_COUNT)
}

/// Index stride that thins `n` samples down to at most `max_x_labels` labels.
#[must_use]
pub fn x_label_stride(n: usize, plot_width: f64) -> usize {
    (n / max_x_labels(plot_width)).max(1)
}

/// Date label in `DD/MM HHh` form.
#[must_use]
pub fn format_x_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m %Hh").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{format_x_label, max_x_labels, x_label_stride};

    #[test]
    fn narrow_plots_keep_the_minimum_label_count() {
        assert_eq!(max_x_labels(100.0), 3);
        assert_eq!(max_x_labels(f64::NAN), 3);
    }

    #[test]
    fn wide_plots_scale_label_count_with_width() {
        assert_eq!(max_x_labels(900.0), 10);
    }

    #[test]
    fn stride_never_drops_to_zero() {
        assert_eq!(x_label_stride(2, 900.0), 1);
        assert_eq!(x_label_stride(48, 300.0), 16);
    }

    #[test]
    fn date_label_uses_day_month_hour() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap();
        assert_eq!(format_x_label(timestamp), "05/03 14h");
    }
}
