use meteogram::core::{
    RangeConstraints, compute_axis_range, expand_range, lin_map, nice_step, tick_values,
};
use proptest::prelude::*;

fn is_nice_mantissa(m: f64) -> bool {
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .any(|nice| (m - nice).abs() < 1e-9)
}

proptest! {
    #[test]
    fn nice_step_stays_in_the_round_family(raw in 1e-6f64..1e9) {
        let step = nice_step(raw);
        prop_assert!(step > 0.0);

        let pow = 10.0f64.powf(raw.log10().floor());
        prop_assert!(
            is_nice_mantissa(step / pow),
            "step {step} is not a round multiple for raw {raw}"
        );
        // Never smaller than the power-of-ten floor of the candidate.
        prop_assert!(step >= pow * (1.0 - 1e-12));
    }

    #[test]
    fn expanded_range_honours_the_minimum_span(
        min in -1_000.0f64..1_000.0,
        extra in 0.0f64..500.0,
        minimum_span in 0.1f64..50.0
    ) {
        let range = expand_range(min, min + extra, 0.12, minimum_span, false, false);
        prop_assert!(range.span() >= minimum_span - 1e-9);
        prop_assert!(range.step > 0.0);
    }

    #[test]
    fn unclamped_ranges_contain_the_data_extent(
        base in -500.0f64..500.0,
        spread in 0.001f64..800.0,
        factors in proptest::collection::vec(0.0f64..1.0, 1..64)
    ) {
        let values: Vec<f64> = factors.iter().map(|f| base + f * spread).collect();
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let range = compute_axis_range(&values, RangeConstraints::default());
        prop_assert!(range.min <= data_min + 1e-9);
        prop_assert!(range.max >= data_max - 1e-9);
    }

    #[test]
    fn range_endpoints_snap_onto_step_multiples(
        min in -1_000.0f64..1_000.0,
        extra in 0.01f64..500.0
    ) {
        let range = expand_range(min, min + extra, 0.12, 1.0, false, false);

        let lo_k = range.min / range.step;
        let hi_k = range.max / range.step;
        prop_assert!((lo_k - lo_k.round()).abs() < 1e-6, "min {} step {}", range.min, range.step);
        prop_assert!((hi_k - hi_k.round()).abs() < 1e-6, "max {} step {}", range.max, range.step);
    }

    #[test]
    fn ticks_cover_the_range_without_drift(
        min in -1_000.0f64..1_000.0,
        extra in 0.01f64..500.0
    ) {
        let range = expand_range(min, min + extra, 0.12, 1.0, false, false);
        let ticks = tick_values(range);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks[0] >= range.min - range.step / 1000.0);
        prop_assert!(*ticks.last().unwrap() <= range.max + range.step / 1000.0);

        // Each tick is an exact multiple of the step from the range floor.
        for &tick in &ticks {
            let k = (tick - range.min) / range.step;
            prop_assert!((k - k.round()).abs() < 1e-6, "tick {tick} drifted off the grid");
        }
    }

    #[test]
    fn ticks_are_strictly_increasing(
        min in -1_000.0f64..1_000.0,
        extra in 0.01f64..500.0
    ) {
        let ticks = tick_values(expand_range(min, min + extra, 0.12, 1.0, false, false));
        for pair in ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn lin_map_round_trip_property(
        x0 in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0
    ) {
        let x1 = x0 + span;
        let x = x0 + factor * span;

        let px = lin_map(x, x0, x1, 0.0, 2048.0);
        let recovered = lin_map(px, 0.0, 2048.0, x0, x1);
        prop_assert!((recovered - x).abs() <= span * 1e-9 + 1e-7);
    }

    #[test]
    fn zero_floor_never_produces_negative_minimum(
        values in proptest::collection::vec(0.0f64..200.0, 1..48)
    ) {
        let constraints = RangeConstraints {
            floor_at_zero: true,
            ..RangeConstraints::default()
        };
        let range = compute_axis_range(&values, constraints);
        prop_assert!(range.min >= 0.0);
    }

    #[test]
    fn locked_range_ignores_the_samples(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 0..48)
    ) {
        let constraints = RangeConstraints {
            locked_range: Some((0.0, 100.0)),
            ..RangeConstraints::default()
        };
        let range = compute_axis_range(&values, constraints);
        prop_assert_eq!(range.min, 0.0);
        prop_assert_eq!(range.max, 100.0);
    }
}
