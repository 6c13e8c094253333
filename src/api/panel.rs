use serde::{Deserialize, Serialize};

use crate::api::style;
use crate::core::range::RangeConstraints;
use crate::render::Color;

/// How a panel's series is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

/// Per-panel configuration. Immutable for the duration of one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOptions {
    /// Axis label suffix, e.g. `°C`.
    pub unit: String,
    pub series_kind: SeriesKind,
    pub color: Color,
    /// Floor on `max - min` of the computed axis range.
    pub minimum_span: f64,
    pub floor_at_zero: bool,
    pub ceiling_at_hundred: bool,
    /// Exact `[min, max]` override, e.g. relative humidity locked to 0..100.
    pub locked_range: Option<(f64, f64)>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            unit: String::new(),
            series_kind: SeriesKind::Line,
            color: style::DEFAULT_LINE_COLOR,
            minimum_span: 1.0,
            floor_at_zero: false,
            ceiling_at_hundred: false,
            locked_range: None,
        }
    }
}

impl PanelOptions {
    #[must_use]
    pub fn line(unit: impl Into<String>, color: Color) -> Self {
        Self {
            unit: unit.into(),
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bar(unit: impl Into<String>, color: Color) -> Self {
        Self {
            unit: unit.into(),
            series_kind: SeriesKind::Bar,
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_minimum_span(mut self, minimum_span: f64) -> Self {
        self.minimum_span = minimum_span;
        self
    }

    #[must_use]
    pub fn with_floor_at_zero(mut self, floor_at_zero: bool) -> Self {
        self.floor_at_zero = floor_at_zero;
        self
    }

    #[must_use]
    pub fn with_ceiling_at_hundred(mut self, ceiling_at_hundred: bool) -> Self {
        self.ceiling_at_hundred = ceiling_at_hundred;
        self
    }

    #[must_use]
    pub fn with_locked_range(mut self, min: f64, max: f64) -> Self {
        self.locked_range = Some((min, max));
        self
    }

    /// Range-calculator constraint set for this panel.
    #[must_use]
    pub fn constraints(&self) -> RangeConstraints {
        RangeConstraints {
            locked_range: self.locked_range,
            floor_at_zero: self.floor_at_zero,
            ceiling_at_hundred: self.ceiling_at_hundred,
            minimum_span: self.minimum_span,
            bar_kind: self.series_kind == SeriesKind::Bar,
            ..RangeConstraints::default()
        }
    }
}

/// Temperature: line, °C, minimum span 8.
#[must_use]
pub fn temperature_panel() -> PanelOptions {
    PanelOptions::line("°C", style::TEMPERATURE_COLOR).with_minimum_span(8.0)
}

/// Precipitation: bar, mm/h, zero-floored, minimum span scaling with the
/// observed maximum so light-rain runs don't stretch into noise.
#[must_use]
pub fn precipitation_panel(observed_max: f64) -> PanelOptions {
    let observed_max = if observed_max.is_finite() {
        observed_max.max(0.0)
    } else {
        0.0
    };
    PanelOptions::bar("mm/h", style::PRECIPITATION_COLOR)
        .with_floor_at_zero(true)
        .with_minimum_span((observed_max * 0.5).max(2.0))
}

/// Wind: line, km/h, zero-floored, minimum span 6.
#[must_use]
pub fn wind_panel() -> PanelOptions {
    PanelOptions::line("km/h", style::WIND_COLOR)
        .with_floor_at_zero(true)
        .with_minimum_span(6.0)
}

/// Relative humidity: line, %, axis locked to 0..100.
#[must_use]
pub fn humidity_panel() -> PanelOptions {
    PanelOptions::line("%", style::HUMIDITY_COLOR).with_locked_range(0.0, 100.0)
}
