pub mod bar_series;
pub mod line_series;
pub mod range;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bar_series::{BAR_GAP_PX, BarGeometry, BarStyle, MIN_VISIBLE_BAR_PX, project_bars};
pub use line_series::{LINE_STROKE_WIDTH, PolyPoint, project_polyline};
pub use range::{
    AxisRange, DEFAULT_PAD_FRACTION, RangeConstraints, compute_axis_range, data_extent,
    expand_range, nice_step,
};
pub use scale::{LinearMap, lin_map};
pub use ticks::{TickValues, format_tick, tick_values};
pub use types::{PlotRect, PlotView};
