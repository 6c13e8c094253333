use approx::assert_relative_eq;
use meteogram::core::{BarStyle, PlotRect, PlotView, project_bars};

fn view(y_min: f64, y_max: f64) -> PlotView {
    PlotView::new(PlotRect::new(56.0, 16.0, 400.0, 400.0), y_min, y_max)
}

#[test]
fn near_zero_positive_bars_keep_the_minimum_visible_height() {
    let view = view(0.0, 2.5);
    let bars = project_bars(&[0.01], 1, view, BarStyle::default());
    assert_eq!(bars.len(), 1);
    assert!(bars[0].height >= 2.0, "height was {}", bars[0].height);
    // The forced bar grows upward from the zero line.
    let y_zero = view.value_to_pixel(0.0);
    assert_relative_eq!(bars[0].y + bars[0].height, y_zero);
}

#[test]
fn exact_zero_bars_are_not_inflated() {
    let bars = project_bars(&[0.0], 1, view(0.0, 2.5), BarStyle::default());
    assert_eq!(bars[0].height, 0.0);
}

#[test]
fn bar_base_sits_on_the_axis_zero_line_not_the_rect_edge() {
    let view = view(-10.0, 10.0);
    let y_zero = view.value_to_pixel(0.0);
    let bars = project_bars(&[5.0, -5.0], 2, view, BarStyle::default());

    // Positive bar hangs above the zero line, negative below.
    assert_relative_eq!(bars[0].y + bars[0].height, y_zero);
    assert_relative_eq!(bars[1].y, y_zero);
    assert_relative_eq!(bars[0].height, bars[1].height);
}

#[test]
fn bar_width_accounts_for_the_fixed_gap() {
    let bars = project_bars(&[1.0; 10], 10, view(0.0, 2.0), BarStyle::default());
    for bar in &bars {
        assert_relative_eq!(bar.width, 400.0 / 10.0 - 2.0);
    }
}

#[test]
fn crowded_panels_floor_the_bar_width_at_one_pixel() {
    let values = vec![1.0; 1000];
    let bars = project_bars(&values, 1000, view(0.0, 2.0), BarStyle::default());
    assert!(bars.iter().all(|bar| bar.width >= 1.0));
}

#[test]
fn empty_series_projects_no_bars() {
    assert!(project_bars(&[], 5, view(0.0, 1.0), BarStyle::default()).is_empty());
    assert!(project_bars(&[1.0], 0, view(0.0, 1.0), BarStyle::default()).is_empty());
}
