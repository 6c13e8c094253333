use chrono::{DateTime, Utc};
use tracing::debug;

use crate::api::layout;
use crate::api::panel::{PanelOptions, SeriesKind};
use crate::api::style;
use crate::core::bar_series::{BarStyle, project_bars};
use crate::core::line_series::{LINE_STROKE_WIDTH, project_polyline};
use crate::core::range::{AxisRange, compute_axis_range};
use crate::core::ticks::{format_tick, tick_values};
use crate::core::types::{PlotRect, PlotView};
use crate::render::{
    LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Surface, SurfaceSpec,
    TextHAlign, TextPrimitive, TextVAlign,
};

/// One panel's input: parallel index and value sequences.
///
/// Lengths may disagree; every consumer works on the common prefix.
#[derive(Debug, Clone, Copy)]
pub struct PanelSeries<'a> {
    pub timestamps: &'a [DateTime<Utc>],
    pub values: &'a [f64],
}

impl<'a> PanelSeries<'a> {
    #[must_use]
    pub const fn new(timestamps: &'a [DateTime<Utc>], values: &'a [f64]) -> Self {
        Self { timestamps, values }
    }
}

/// Materializes one fully painted panel as a render frame.
///
/// Infallible by design: malformed or empty input degrades to empty axes on
/// a cleared surface rather than an error.
#[must_use]
pub fn build_panel_frame(
    spec: SurfaceSpec,
    series: PanelSeries<'_>,
    options: &PanelOptions,
) -> RenderFrame {
    let surface = Surface::from_spec(spec);
    let rect = layout::plot_rect(surface);
    let range = compute_axis_range(series.values, options.constraints());
    debug!(
        unit = %options.unit,
        min = range.min,
        max = range.max,
        step = range.step,
        samples = series.values.len(),
        "computed panel axis range"
    );

    let view = PlotView::new(rect, range.min, range.max);
    let mut frame = RenderFrame::new(surface);

    push_frame_border(&mut frame, rect);
    push_y_ticks(&mut frame, view, range, &options.unit);

    match options.series_kind {
        SeriesKind::Line => {
            let points = project_polyline(series.values, series.timestamps.len(), view);
            if points.len() >= 2 {
                frame.push_polyline(PolylinePrimitive::new(
                    points,
                    LINE_STROKE_WIDTH,
                    options.color,
                ));
            }
        }
        SeriesKind::Bar => {
            for bar in project_bars(
                series.values,
                series.timestamps.len(),
                view,
                BarStyle::default(),
            ) {
                frame.push_rect(RectPrimitive::new(
                    bar.x,
                    bar.y,
                    bar.width,
                    bar.height,
                    options.color,
                ));
            }
        }
    }

    push_x_labels(&mut frame, view, series.timestamps);
    frame
}

/// Axis range the frame builder would use for the given series and options.
///
/// Exposed so snapshots and differential tests see the exact same numbers
/// as the painted frame.
#[must_use]
pub fn panel_axis_range(series: PanelSeries<'_>, options: &PanelOptions) -> AxisRange {
    compute_axis_range(series.values, options.constraints())
}

fn push_frame_border(frame: &mut RenderFrame, rect: PlotRect) {
    // Half-pixel alignment keeps the 1px border crisp; the stroke hugs the
    // inside of the rectangle.
    let x0 = rect.x + 0.5;
    let y0 = rect.y + 0.5;
    let x1 = rect.x + rect.width - 0.5;
    let y1 = rect.y + rect.height - 0.5;
    for (ax, ay, bx, by) in [
        (x0, y0, x1, y0),
        (x1, y0, x1, y1),
        (x1, y1, x0, y1),
        (x0, y1, x0, y0),
    ] {
        frame.push_line(LinePrimitive::new(
            ax,
            ay,
            bx,
            by,
            style::BORDER_STROKE_WIDTH,
            style::BORDER_COLOR,
        ));
    }
}

fn push_y_ticks(frame: &mut RenderFrame, view: PlotView, range: AxisRange, unit: &str) {
    for value in tick_values(range) {
        let y = view.value_to_pixel(value);
        frame.push_line(LinePrimitive::new(
            view.rect.x,
            y + 0.5,
            view.rect.right(),
            y + 0.5,
            style::GRID_STROKE_WIDTH,
            style::GRID_COLOR,
        ));
        frame.push_text(TextPrimitive::new(
            format!("{}{unit}", format_tick(value, range.step)),
            view.rect.x - style::Y_LABEL_GAP_PX,
            y,
            style::LABEL_FONT_SIZE_PX,
            style::LABEL_COLOR,
            TextHAlign::Right,
            TextVAlign::Middle,
        ));
    }
}

fn push_x_labels(frame: &mut RenderFrame, view: PlotView, timestamps: &[DateTime<Utc>]) {
    let n = timestamps.len();
    if n == 0 {
        return;
    }

    let stride = layout::x_label_stride(n, view.rect.width);
    let mut index = 0;
    while index < n {
        let x = view.index_to_pixel(index, n);
        frame.push_text(TextPrimitive::new(
            layout::format_x_label(timestamps[index]),
            x,
            view.rect.bottom() + style::X_LABEL_GAP_PX,
            style::LABEL_FONT_SIZE_PX,
            style::LABEL_COLOR,
            TextHAlign::Center,
            TextVAlign::Top,
        ));
        index += stride;
    }
}
