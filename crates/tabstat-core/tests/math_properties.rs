//! Property-based tests for moments and quantiles

use proptest::prelude::*;
use tabstat_core::math::{moments, quantiles};

proptest! {
    // Quantiles are monotone in p and bounded by the sample extremes
    #[test]
    fn prop_quantiles_monotone(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let sorted = quantiles::sorted(&data);
        let q25 = quantiles::quantile_sorted(&sorted, 0.25).unwrap();
        let q50 = quantiles::quantile_sorted(&sorted, 0.5).unwrap();
        let q75 = quantiles::quantile_sorted(&sorted, 0.75).unwrap();

        prop_assert!(sorted[0] <= q25);
        prop_assert!(q25 <= q50);
        prop_assert!(q50 <= q75);
        prop_assert!(q75 <= sorted[sorted.len() - 1]);
    }

    // Sample variance is never negative and is defined from two values up
    #[test]
    fn prop_variance_non_negative(data in prop::collection::vec(-1e3f64..1e3, 0..100)) {
        match moments::sample_variance(&data) {
            Some(v) => {
                prop_assert!(data.len() >= 2);
                prop_assert!(v >= 0.0);
            }
            None => prop_assert!(data.len() < 2),
        }
    }

    // Mean lies between min and max
    #[test]
    fn prop_mean_bounded(data in prop::collection::vec(-1e6f64..1e6, 1..100)) {
        let mean = moments::mean(&data).unwrap();
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= min - 1e-6 && mean <= max + 1e-6);
    }
}
