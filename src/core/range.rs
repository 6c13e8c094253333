use serde::{Deserialize, Serialize};

/// Fraction of the data span added as padding on each side of an axis.
pub const DEFAULT_PAD_FRACTION: f64 = 0.12;

/// Constraint set for one axis-range computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraints {
    /// Exact `[min, max]` override; skips padding and snapping entirely.
    pub locked_range: Option<(f64, f64)>,
    pub floor_at_zero: bool,
    pub ceiling_at_hundred: bool,
    /// Lower bound on `max - min` before snapping.
    pub minimum_span: f64,
    /// Bar series with a non-negative floor get zero-based headroom padding
    /// instead of symmetric padding.
    pub bar_kind: bool,
    pub pad_fraction: f64,
}

impl Default for RangeConstraints {
    fn default() -> Self {
        Self {
            locked_range: None,
            floor_at_zero: false,
            ceiling_at_hundred: false,
            minimum_span: 1.0,
            bar_kind: false,
            pad_fraction: DEFAULT_PAD_FRACTION,
        }
    }
}

impl RangeConstraints {
    fn sanitized(self) -> Self {
        let mut out = self;
        if !out.minimum_span.is_finite() || out.minimum_span < 0.0 {
            out.minimum_span = 1.0;
        }
        if !out.pad_fraction.is_finite() || out.pad_fraction < 0.0 {
            out.pad_fraction = DEFAULT_PAD_FRACTION;
        }
        if let Some((lo, hi)) = out.locked_range {
            if !lo.is_finite() || !hi.is_finite() {
                out.locked_range = None;
            } else if lo > hi {
                out.locked_range = Some((hi, lo));
            }
        }
        out
    }
}

/// Axis range with a "nice" tick step. Derived per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Chooses a step from the `{1, 2, 2.5, 5, 10} x 10^k` family.
///
/// The thresholds bias toward round, humanly-scannable increments over the
/// raw four-division candidate.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let pow = 10.0_f64.powf(raw.log10().floor());
    let n = raw / pow;
    if n <= 1.2 {
        pow
    } else if n <= 2.5 {
        2.0 * pow
    } else if n <= 3.5 {
        2.5 * pow
    } else if n <= 7.5 {
        5.0 * pow
    } else {
        10.0 * pow
    }
}

/// Single-pass finite min/max over a sample sequence.
///
/// Empty or all-non-finite input yields `[0, 1]`; a collapsed extent is
/// widened by one unit on each side so downstream math never divides by zero.
#[must_use]
pub fn data_extent(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        if !value.is_finite() {
            continue;
        }
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}

/// Pads a raw extent, enforces the minimum span, applies the zero/hundred
/// clamps, and snaps both ends onto multiples of the chosen nice step.
///
/// The snap widens the range so grid lines land on round values.
#[must_use]
pub fn expand_range(
    min: f64,
    max: f64,
    pad_fraction: f64,
    minimum_span: f64,
    floor_at_zero: bool,
    ceiling_at_hundred: bool,
) -> AxisRange {
    let span = (max - min).max(minimum_span);
    let pad = span * pad_fraction;
    let mut lo = min - pad;
    let mut hi = max + pad;

    if hi - lo < minimum_span {
        let extra = (minimum_span - (hi - lo)) / 2.0;
        lo -= extra;
        hi += extra;
    }
    if floor_at_zero {
        lo = lo.max(0.0);
    }
    if ceiling_at_hundred {
        hi = hi.min(100.0);
    }

    let step = nice_step((hi - lo) / 4.0);
    lo = (lo / step).floor() * step;
    hi = (hi / step).ceil() * step;
    AxisRange { min: lo, max: hi, step }
}

/// Computes the axis range and tick step for one panel.
///
/// Dispatch order: locked range wins, then zero-floored bars get headroom
/// padding on the positive span only, then the general padded path. The
/// post-hoc clamps can shrink the snapped range back inside `[0, 100]`;
/// visual cleanliness is preferred over arithmetic purity there.
///
/// Never fails: degenerate input produces a `[0, 1]`-like safe range.
#[must_use]
pub fn compute_axis_range(values: &[f64], constraints: RangeConstraints) -> AxisRange {
    let constraints = constraints.sanitized();

    let mut range = if let Some((lo, hi)) = constraints.locked_range {
        AxisRange {
            min: lo,
            max: hi,
            step: nice_step((hi - lo) / 4.0),
        }
    } else {
        let (data_min, data_max) = data_extent(values);
        if constraints.bar_kind && (constraints.floor_at_zero || data_min >= 0.0) {
            let span_floor = data_max.max(constraints.minimum_span);
            let top = data_max.max(span_floor) + span_floor * DEFAULT_PAD_FRACTION;
            expand_range(0.0, top, 0.0, constraints.minimum_span, true, false)
        } else {
            expand_range(
                data_min,
                data_max,
                constraints.pad_fraction,
                constraints.minimum_span,
                constraints.floor_at_zero,
                constraints.ceiling_at_hundred,
            )
        }
    };

    if constraints.floor_at_zero && range.min < 0.0 {
        range.min = 0.0;
    }
    if constraints.ceiling_at_hundred && range.max > 100.0 {
        range.max = 100.0;
    }
    range
}
