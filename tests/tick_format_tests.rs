use meteogram::core::{AxisRange, format_tick, tick_values};

#[test]
fn coarse_steps_format_as_integers() {
    assert_eq!(format_tick(12.0, 5.0), "12");
    assert_eq!(format_tick(12.4, 1.0), "12");
    assert_eq!(format_tick(-7.8, 2.0), "-8");
}

#[test]
fn medium_steps_keep_one_decimal() {
    assert_eq!(format_tick(2.5, 0.5), "2.5");
    assert_eq!(format_tick(3.0, 0.25), "3.0");
    assert_eq!(format_tick(0.1, 0.1), "0.1");
}

#[test]
fn fine_steps_keep_two_decimals() {
    assert_eq!(format_tick(0.05, 0.05), "0.05");
    assert_eq!(format_tick(2.0, 0.05), "2.00");
}

#[test]
fn fine_steps_never_produce_duplicate_adjacent_labels() {
    let range = AxisRange {
        min: 2.0,
        max: 2.2,
        step: 0.05,
    };
    let labels: Vec<String> = tick_values(range)
        .iter()
        .map(|&v| format_tick(v, range.step))
        .collect();
    for pair in labels.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn negative_zero_rounds_to_plain_zero() {
    assert_eq!(format_tick(-0.2, 1.0), "0");
    assert_eq!(format_tick(-0.04, 0.5), "0.0");
}

#[test]
fn ticks_are_exact_step_multiples_of_the_minimum() {
    let range = AxisRange {
        min: 0.0,
        max: 0.3,
        step: 0.05,
    };
    for (k, &tick) in tick_values(range).iter().enumerate() {
        let residue = (tick - (range.min + k as f64 * range.step)).abs();
        assert!(residue < 1e-9, "tick {tick} drifted by {residue}");
    }
}

#[test]
fn top_boundary_tick_survives_floating_point_accumulation() {
    // 0.1 is not representable exactly; naive accumulation misses 0.7.
    let range = AxisRange {
        min: 0.0,
        max: 0.7,
        step: 0.1,
    };
    let ticks = tick_values(range);
    assert_eq!(ticks.len(), 8);
    assert!((ticks[ticks.len() - 1] - 0.7).abs() < 1e-9);
}

#[test]
fn collapsed_range_yields_a_single_tick() {
    let range = AxisRange {
        min: 5.0,
        max: 5.0,
        step: 1.0,
    };
    let ticks = tick_values(range);
    assert_eq!(ticks.as_slice(), &[5.0]);
}
