use smallvec::SmallVec;

use crate::core::range::AxisRange;

/// Tick buffer sized for typical axes (four divisions plus snapping slack).
pub type TickValues = SmallVec<[f64; 16]>;

/// Generates tick values from `min` to `max` inclusive, one per step.
///
/// Each tick is recomputed as `min + round((v - min) / step) * step` instead
/// of accumulating `v += step`, so every emitted value is an exact step
/// multiple of the axis minimum regardless of floating-point drift. The
/// `step / 1000` epsilon keeps the top boundary tick from being missed.
#[must_use]
pub fn tick_values(range: AxisRange) -> TickValues {
    let mut ticks = TickValues::new();
    if !range.min.is_finite()
        || !range.max.is_finite()
        || !range.step.is_finite()
        || range.step <= 0.0
    {
        return ticks;
    }

    let eps = range.step / 1000.0;
    let mut v = range.min;
    while v <= range.max + eps {
        let k = ((v - range.min) / range.step).round();
        ticks.push(range.min + k * range.step);
        v += range.step;
    }
    ticks
}

/// Formats a tick with precision matched to the step magnitude.
///
/// Coarse axes drop uninformative decimals; fine axes keep enough digits
/// that adjacent ticks never display the same label.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let abs_step = step.abs();
    if abs_step >= 1.0 {
        // `+ 0.0` folds the negative zero produced by rounding values
        // like -0.2 back into plain "0".
        format!("{}", value.round() + 0.0)
    } else if abs_step >= 0.1 {
        format!("{:.1}", (value * 10.0).round() / 10.0 + 0.0)
    } else {
        format!("{:.2}", (value * 100.0).round() / 100.0 + 0.0)
    }
}
