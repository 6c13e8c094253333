use criterion::{Criterion, criterion_group, criterion_main};
use meteogram::core::{
    PlotRect, PlotView, RangeConstraints, compute_axis_range, project_bars, project_polyline,
    tick_values,
};
use std::hint::black_box;

fn bench_axis_range_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| 15.0 + ((i as f64) * 0.01).sin() * 9.5)
        .collect();
    let constraints = RangeConstraints {
        minimum_span: 8.0,
        ..RangeConstraints::default()
    };

    c.bench_function("axis_range_10k", |b| {
        b.iter(|| compute_axis_range(black_box(&values), black_box(constraints)))
    });
}

fn bench_tick_values(c: &mut Criterion) {
    let constraints = RangeConstraints::default();
    let range = compute_axis_range(&[3.0, 97.0], constraints);

    c.bench_function("tick_values", |b| {
        b.iter(|| tick_values(black_box(range)))
    });
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| ((i as f64) * 0.003).cos() * 40.0).collect();
    let view = PlotView::new(PlotRect::new(56.0, 16.0, 1800.0, 700.0), -50.0, 50.0);

    c.bench_function("polyline_projection_10k", |b| {
        b.iter(|| project_polyline(black_box(&values), black_box(values.len()), black_box(view)))
    });

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            project_bars(
                black_box(&values),
                black_box(values.len()),
                black_box(view),
                Default::default(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_axis_range_10k,
    bench_tick_values,
    bench_series_projection_10k
);
criterion_main!(benches);
