//! Property tests for whole-pipeline invariants

mod common;

use common::{generated_table, init_tracing};
use proptest::prelude::*;
use tabstat::{analyze, AnalysisConfig, IngestOptions};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_pipeline_idempotent(rows in 3usize..60, numeric in 1usize..4, seed in any::<u64>()) {
        init_tracing();
        let text = generated_table(rows, numeric, seed);
        let options = IngestOptions::default();
        let config = AnalysisConfig::default();
        let first = analyze(&text, None, &options, &config);
        let second = analyze(&text, None, &options, &config);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap()),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "runs disagreed"),
        }
    }

    #[test]
    fn prop_p_values_in_unit_interval(rows in 3usize..80, seed in any::<u64>()) {
        let text = generated_table(rows, 3, seed);
        let analysis = analyze(&text, None, &IngestOptions::default(), &AnalysisConfig::default());
        if let Ok(analysis) = analysis {
            let summary = &analysis.summary;
            for p in summary.correlations().iter().filter_map(|c| c.p_value) {
                prop_assert!((0.0..=1.0).contains(&p));
            }
            for comparison in summary.group_comparisons() {
                prop_assert!((0.0..=1.0).contains(&comparison.p_value()));
            }
            for test in summary.mean_tests() {
                prop_assert!((0.0..=1.0).contains(&test.p_value));
            }
        }
    }
}
