//! Significance tests over the columns of a [`Dataset`](tabstat_core::Dataset)
//!
//! Three analyzers, each returning only the tests whose preconditions held:
//!
//! - [`CorrelationAnalyzer`]: Pearson correlation for every unordered pair of
//!   numeric columns, with a t-approximation p-value.
//! - [`GroupComparisonEngine`]: Student's t-test or one-way ANOVA for every
//!   (numeric, categorical) pair, chosen by the number of labels.
//! - [`LargeSampleMeanTester`]: one-sample z-test of each numeric column
//!   against [`HYPOTHESIZED_MEAN`](tabstat_core::HYPOTHESIZED_MEAN).
//!
//! A test that cannot run yields a [`SkipReason`](tabstat_core::SkipReason)
//! internally; it is logged and left out of the output.
//!
//! # Example
//!
//! ```
//! use tabstat_core::{classify, AnalysisConfig, Column, Dataset};
//! use tabstat_hypothesis::{GroupComparisonEngine, PairwiseAnalyzer};
//!
//! let labels = ["A", "A", "B", "B"].iter().map(|l| Some(l.to_string())).collect();
//! let dataset = Dataset::new(vec![
//!     Column::categorical("group", labels),
//!     Column::numeric("value", vec![Some(10.0), Some(12.0), Some(20.0), Some(22.0)]),
//! ])
//! .unwrap();
//!
//! let engine = GroupComparisonEngine::from_config(&AnalysisConfig::default());
//! let results = engine.analyze_all(&dataset, &classify(&dataset), false);
//! assert_eq!(results.len(), 1);
//! assert!(results[0].as_two_sample().is_some());
//! ```

mod correlation;
mod distributions;
mod group;
mod interpretation;
mod mean_test;
mod traits;
mod types;

pub use correlation::{pearson, CorrelationAnalyzer};
pub use distributions::{f_upper_tail, normal_two_sided, students_t_two_sided};
pub use group::{one_way_anova, student_t_test, AnovaTest, GroupComparisonEngine, TTest};
pub use interpretation::{significance_clause, CorrelationStrength};
pub use mean_test::LargeSampleMeanTester;
pub use traits::PairwiseAnalyzer;
pub use types::{
    CorrelationResult, GroupComparisonResult, GroupMean, MeanTestResult, MultiSampleResult,
    TwoSampleResult,
};
