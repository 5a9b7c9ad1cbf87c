//! Pearson correlation between numeric columns

use crate::distributions::students_t_two_sided;
use crate::interpretation::{describe_correlation, undefined_correlation};
use crate::traits::PairwiseAnalyzer;
use crate::types::CorrelationResult;
use tabstat_core::math::moments;
use tabstat_core::{AnalysisConfig, ColumnPartition, Dataset, SkipReason, DEFAULT_SIGNIFICANCE_LEVEL};

/// Pearson correlation coefficient, clamped to `[-1, 1]`
///
/// `None` when the lengths differ, fewer than two points are given, or
/// either side has no spread.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mean_x = moments::mean(x)?;
    let mean_y = moments::mean(y)?;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    if sum_xx == 0.0 || sum_yy == 0.0 {
        return None;
    }
    let r = sum_xy / (sum_xx * sum_yy).sqrt();
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlation over every unordered pair of numeric columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationAnalyzer {
    significance_level: f64,
}

impl Default for CorrelationAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_LEVEL)
    }
}

impl CorrelationAnalyzer {
    pub fn new(significance_level: f64) -> Self {
        Self { significance_level }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.significance_level)
    }

    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    /// Two-sided p-value of `r` over `n` observations
    ///
    /// Uses `t = r * sqrt((n - 2) / (1 - r^2))` on `n - 2` degrees of freedom.
    /// Two points always lie on a line, so `n == 2` gives 1.
    pub fn p_value(r: f64, n: usize) -> Result<f64, SkipReason> {
        if n < 2 {
            return Err(SkipReason::InsufficientObservations {
                required: 2,
                actual: n,
            });
        }
        if n == 2 {
            return Ok(1.0);
        }
        if r.abs() >= 1.0 {
            return Ok(0.0);
        }
        let df = (n - 2) as f64;
        let t = r * (df / (1.0 - r * r)).sqrt();
        students_t_two_sided(t, df)
    }
}

impl PairwiseAnalyzer for CorrelationAnalyzer {
    type Output = CorrelationResult;

    fn name(&self) -> &'static str {
        "correlation"
    }

    fn pairs<'a>(&self, partition: &'a ColumnPartition) -> Vec<(&'a str, &'a str)> {
        partition.numeric_pairs()
    }

    fn analyze_pair(
        &self,
        dataset: &Dataset,
        left: &str,
        right: &str,
    ) -> Result<CorrelationResult, SkipReason> {
        let (x, y) = dataset
            .paired_numeric(left, right)
            .map_err(|e| SkipReason::Column(e.to_string()))?;
        let n = x.len();
        if n < 2 {
            return Err(SkipReason::InsufficientObservations {
                required: 2,
                actual: n,
            });
        }

        let result = |correlation: Option<f64>, p_value: Option<f64>, interpretation: String| {
            CorrelationResult {
                variable1: left.to_string(),
                variable2: right.to_string(),
                correlation,
                p_value,
                observations: n,
                interpretation,
            }
        };

        let constant = if moments::is_constant(&x) {
            Some(left)
        } else if moments::is_constant(&y) {
            Some(right)
        } else {
            None
        };
        if let Some(column) = constant {
            return Ok(result(None, None, undefined_correlation(column)));
        }

        let r = pearson(&x, &y).ok_or(SkipReason::NonFiniteStatistic("correlation coefficient"))?;
        let p = Self::p_value(r, n)?;
        Ok(result(
            Some(r),
            Some(p),
            describe_correlation(r, p, self.significance_level),
        ))
    }
}
