//! Result records emitted by the hypothesis tests

use crate::interpretation::CorrelationStrength;
use serde::{Deserialize, Serialize};

/// Pearson correlation between two numeric columns
///
/// `correlation` and `p_value` are both `None` when either column has zero
/// variance over the jointly present rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub variable1: String,
    pub variable2: String,
    pub correlation: Option<f64>,
    pub p_value: Option<f64>,
    /// Rows where both values were present
    pub observations: usize,
    pub interpretation: String,
}

impl CorrelationResult {
    pub fn strength(&self) -> Option<CorrelationStrength> {
        self.correlation.map(CorrelationStrength::from_coefficient)
    }

    /// True when the pair is `{a, b}` in either order
    pub fn is_pair(&self, a: &str, b: &str) -> bool {
        (self.variable1 == a && self.variable2 == b) || (self.variable1 == b && self.variable2 == a)
    }
}

/// Student's t-test between the two labels of a categorical column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleResult {
    pub categorical_column: String,
    pub numeric_column: String,
    pub group1: String,
    pub group2: String,
    pub group1_size: usize,
    pub group2_size: usize,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub interpretation: String,
}

/// Mean of one group in a multi-sample comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    pub count: usize,
}

/// One-way ANOVA across every label of a categorical column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSampleResult {
    pub categorical_column: String,
    pub numeric_column: String,
    pub f_statistic: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub p_value: f64,
    pub interpretation: String,
    /// In label first-appearance order
    pub group_means: Vec<GroupMean>,
}

impl MultiSampleResult {
    pub fn group_mean(&self, label: &str) -> Option<f64> {
        self.group_means
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.mean)
    }
}

/// Outcome of a group comparison, tagged by the test that ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum GroupComparisonResult {
    TwoSample(TwoSampleResult),
    MultiSample(MultiSampleResult),
}

impl GroupComparisonResult {
    pub fn as_two_sample(&self) -> Option<&TwoSampleResult> {
        match self {
            Self::TwoSample(result) => Some(result),
            Self::MultiSample(_) => None,
        }
    }

    pub fn as_multi_sample(&self) -> Option<&MultiSampleResult> {
        match self {
            Self::MultiSample(result) => Some(result),
            Self::TwoSample(_) => None,
        }
    }

    pub fn numeric_column(&self) -> &str {
        match self {
            Self::TwoSample(r) => &r.numeric_column,
            Self::MultiSample(r) => &r.numeric_column,
        }
    }

    pub fn categorical_column(&self) -> &str {
        match self {
            Self::TwoSample(r) => &r.categorical_column,
            Self::MultiSample(r) => &r.categorical_column,
        }
    }

    pub fn p_value(&self) -> f64 {
        match self {
            Self::TwoSample(r) => r.p_value,
            Self::MultiSample(r) => r.p_value,
        }
    }

    pub fn interpretation(&self) -> &str {
        match self {
            Self::TwoSample(r) => &r.interpretation,
            Self::MultiSample(r) => &r.interpretation,
        }
    }
}

/// Large-sample z-test of a column mean against a fixed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanTestResult {
    pub numeric_column: String,
    pub hypothesized_mean: f64,
    pub sample_mean: f64,
    pub sample_std: f64,
    pub observations: usize,
    pub z_statistic: f64,
    pub p_value: f64,
    pub interpretation: String,
}
