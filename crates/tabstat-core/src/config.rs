//! Configuration for the statistical analysis stages

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hypothesized population mean for the large-sample mean test
///
/// Fixed at zero. Not configurable.
pub const HYPOTHESIZED_MEAN: f64 = 0.0;

/// Conventional significance threshold
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Largest number of categorical labels treated as a comparable factor
pub const DEFAULT_MAX_GROUP_COUNT: usize = 10;

/// Smallest sample for which the normal approximation is used
pub const DEFAULT_MIN_MEAN_TEST_OBSERVATIONS: usize = 30;

/// Tunables for the analysis stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Alpha used in every significance verdict
    pub significance_level: f64,
    /// Categorical columns with more labels than this are not compared
    pub max_group_count: usize,
    /// Minimum non-missing values before the mean test runs
    pub min_mean_test_observations: usize,
    /// Run pairwise tests on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            max_group_count: DEFAULT_MAX_GROUP_COUNT,
            min_mean_test_observations: DEFAULT_MIN_MEAN_TEST_OBSERVATIONS,
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_significance_level(mut self, alpha: f64) -> Self {
        self.significance_level = alpha;
        self
    }

    pub fn with_max_group_count(mut self, max: usize) -> Self {
        self.max_group_count = max;
        self
    }

    pub fn with_min_mean_test_observations(mut self, min: usize) -> Self {
        self.min_mean_test_observations = min;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<()> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "significance level {} must be in (0, 1)",
                self.significance_level
            )));
        }
        if self.max_group_count < 3 {
            return Err(Error::InvalidParameter(format!(
                "max group count {} must be at least 3",
                self.max_group_count
            )));
        }
        if self.min_mean_test_observations < 2 {
            return Err(Error::InvalidParameter(format!(
                "minimum mean-test observations {} must be at least 2",
                self.min_mean_test_observations
            )));
        }
        Ok(())
    }
}
