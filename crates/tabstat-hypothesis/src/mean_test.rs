//! One-sample z-test of column means

use crate::distributions::normal_two_sided;
use crate::interpretation::describe_mean_test;
use crate::types::MeanTestResult;
use tabstat_core::math::moments;
use tabstat_core::{
    AnalysisConfig, Column, ColumnKind, Dataset, SkipReason, DEFAULT_MIN_MEAN_TEST_OBSERVATIONS,
    DEFAULT_SIGNIFICANCE_LEVEL, HYPOTHESIZED_MEAN,
};
use tracing::{debug, instrument, warn};

/// Tests each numeric column's mean against [`HYPOTHESIZED_MEAN`]
///
/// `z = (mean - mu0) / (std / sqrt(n))` with a two-sided normal p-value.
/// Runs only with at least `min_observations` present values and nonzero
/// spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargeSampleMeanTester {
    significance_level: f64,
    min_observations: usize,
}

impl Default for LargeSampleMeanTester {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_LEVEL, DEFAULT_MIN_MEAN_TEST_OBSERVATIONS)
    }
}

impl LargeSampleMeanTester {
    pub fn new(significance_level: f64, min_observations: usize) -> Self {
        Self {
            significance_level,
            min_observations,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.significance_level, config.min_mean_test_observations)
    }

    pub fn min_observations(&self) -> usize {
        self.min_observations
    }

    pub fn test_column(&self, column: &Column) -> Result<MeanTestResult, SkipReason> {
        if column.kind() != ColumnKind::Numeric {
            return Err(SkipReason::Column(format!(
                "'{}' is not numeric",
                column.name()
            )));
        }
        let values = column.numeric_values();
        let n = values.len();
        if n < self.min_observations.max(2) {
            return Err(SkipReason::InsufficientObservations {
                required: self.min_observations.max(2),
                actual: n,
            });
        }
        if moments::is_constant(&values) {
            return Err(SkipReason::ZeroVariance {
                column: column.name().to_string(),
            });
        }

        let mean = moments::mean(&values).unwrap_or_default();
        let std = moments::sample_std(&values).unwrap_or_default();
        let z = (mean - HYPOTHESIZED_MEAN) / (std / (n as f64).sqrt());
        let p = normal_two_sided(z)?;

        Ok(MeanTestResult {
            numeric_column: column.name().to_string(),
            hypothesized_mean: HYPOTHESIZED_MEAN,
            sample_mean: mean,
            sample_std: std,
            observations: n,
            z_statistic: z,
            p_value: p,
            interpretation: describe_mean_test(
                column.name(),
                HYPOTHESIZED_MEAN,
                p,
                self.significance_level,
            ),
        })
    }

    /// Results for the numeric columns that qualify, in column order
    #[instrument(skip_all, fields(columns = dataset.column_count()))]
    pub fn test_all(&self, dataset: &Dataset) -> Vec<MeanTestResult> {
        let mut results = Vec::new();
        for column in dataset.columns() {
            if column.kind() != ColumnKind::Numeric {
                continue;
            }
            match self.test_column(column) {
                Ok(result) => results.push(result),
                Err(reason) if reason.is_unexpected() => {
                    warn!(column = column.name(), %reason, "mean test omitted");
                }
                Err(reason) => {
                    debug!(column = column.name(), %reason, "mean test skipped");
                }
            }
        }
        debug!(emitted = results.len(), "mean tests finished");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn alternating(n: usize) -> Vec<Option<f64>> {
        (0..n)
            .map(|i| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                Some(sign * (i % 7) as f64 + 0.5)
            })
            .collect()
    }

    #[test]
    fn test_z_test_reference() {
        let column = Column::numeric("x", alternating(40));
        let result = LargeSampleMeanTester::default().test_column(&column).unwrap();
        assert_eq!(result.observations, 40);
        assert_eq!(result.hypothesized_mean, 0.0);
        assert_abs_diff_eq!(result.sample_mean, 0.525, epsilon = 1e-12);
        assert_abs_diff_eq!(result.sample_std, 3.5263658928500896, epsilon = 1e-12);
        assert_abs_diff_eq!(result.z_statistic, 0.9415901934365586, epsilon = 1e-10);
        assert_abs_diff_eq!(result.p_value, 0.34640249240915016, epsilon = 1e-9);
        assert!(result.interpretation.contains("is not significantly different from 0"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let tester = LargeSampleMeanTester::default();
        assert_eq!(
            tester.test_column(&Column::numeric("x", alternating(29))),
            Err(SkipReason::InsufficientObservations {
                required: 30,
                actual: 29
            })
        );
        assert!(tester.test_column(&Column::numeric("x", alternating(30))).is_ok());
    }

    #[test]
    fn test_missing_values_not_counted() {
        let mut values = alternating(30);
        values[3] = None;
        let column = Column::numeric("x", values);
        assert!(LargeSampleMeanTester::default().test_column(&column).is_err());
    }

    #[test]
    fn test_constant_column_skipped_at_any_size() {
        let column = Column::numeric("flat", vec![Some(0.1); 500]);
        assert_eq!(
            LargeSampleMeanTester::default().test_column(&column),
            Err(SkipReason::ZeroVariance {
                column: "flat".to_string()
            })
        );
    }

    #[test]
    fn test_all_skips_categorical_columns() {
        let ds = Dataset::new(vec![
            Column::categorical("label", vec![Some("a".to_string()); 40]),
            Column::numeric("x", alternating(40)),
            Column::numeric("flat", vec![Some(1.0); 40]),
        ])
        .unwrap();
        let results = LargeSampleMeanTester::default().test_all(&ds);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].numeric_column, "x");
    }
}
