//! Aggregation of every stage's output into one summary

use serde::{Deserialize, Serialize};
use tabstat_core::Result;
use tabstat_describe::{ColumnProfile, DescriptiveStats};
use tabstat_hypothesis::{
    CorrelationResult, GroupComparisonResult, MeanTestResult, MultiSampleResult, TwoSampleResult,
};

/// Everything computed for one dataset
///
/// Built once by [`SummaryAssembler`] and read-only afterwards. Lists keep
/// the deterministic order in which their tests were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    descriptive: Vec<ColumnProfile>,
    correlations: Vec<CorrelationResult>,
    group_comparisons: Vec<GroupComparisonResult>,
    mean_tests: Vec<MeanTestResult>,
}

impl StatisticalSummary {
    /// One profile per column, in column order
    pub fn descriptive(&self) -> &[ColumnProfile] {
        &self.descriptive
    }

    pub fn correlations(&self) -> &[CorrelationResult] {
        &self.correlations
    }

    /// Two-sample and multi-sample results pooled
    pub fn group_comparisons(&self) -> &[GroupComparisonResult] {
        &self.group_comparisons
    }

    pub fn mean_tests(&self) -> &[MeanTestResult] {
        &self.mean_tests
    }

    pub fn two_sample_results(&self) -> impl Iterator<Item = &TwoSampleResult> {
        self.group_comparisons
            .iter()
            .filter_map(GroupComparisonResult::as_two_sample)
    }

    pub fn multi_sample_results(&self) -> impl Iterator<Item = &MultiSampleResult> {
        self.group_comparisons
            .iter()
            .filter_map(GroupComparisonResult::as_multi_sample)
    }

    /// Descriptive statistics of a numeric column by name
    pub fn numeric_profile(&self, column: &str) -> Option<&DescriptiveStats> {
        self.descriptive
            .iter()
            .find(|p| p.column == column)
            .and_then(ColumnProfile::numeric)
    }

    pub fn correlation(&self, a: &str, b: &str) -> Option<&CorrelationResult> {
        self.correlations.iter().find(|c| c.is_pair(a, b))
    }

    pub fn mean_test(&self, column: &str) -> Option<&MeanTestResult> {
        self.mean_tests.iter().find(|m| m.numeric_column == column)
    }

    /// Number of significance tests that ran
    pub fn test_count(&self) -> usize {
        self.correlations.len() + self.group_comparisons.len() + self.mean_tests.len()
    }

    /// Key/value form for narrative generation; undefined values are `null`
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Collects stage outputs into a [`StatisticalSummary`]
///
/// No computation happens here; inputs are stored in the order given.
#[derive(Debug, Default)]
pub struct SummaryAssembler {
    summary: StatisticalSummary,
}

impl SummaryAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptive(mut self, profiles: Vec<ColumnProfile>) -> Self {
        self.summary.descriptive = profiles;
        self
    }

    pub fn with_correlations(mut self, correlations: Vec<CorrelationResult>) -> Self {
        self.summary.correlations = correlations;
        self
    }

    pub fn with_group_comparisons(mut self, comparisons: Vec<GroupComparisonResult>) -> Self {
        self.summary.group_comparisons = comparisons;
        self
    }

    pub fn with_mean_tests(mut self, mean_tests: Vec<MeanTestResult>) -> Self {
        self.summary.mean_tests = mean_tests;
        self
    }

    pub fn assemble(self) -> StatisticalSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_describe::ProfileStats;

    fn correlation(a: &str, b: &str) -> CorrelationResult {
        CorrelationResult {
            variable1: a.to_string(),
            variable2: b.to_string(),
            correlation: Some(0.5),
            p_value: Some(0.2),
            observations: 10,
            interpretation: String::new(),
        }
    }

    #[test]
    fn test_assembler_preserves_order() {
        let summary = SummaryAssembler::new()
            .with_correlations(vec![correlation("b", "c"), correlation("a", "b")])
            .assemble();
        assert_eq!(summary.correlations()[0].variable1, "b");
        assert_eq!(summary.correlations()[1].variable1, "a");
        assert_eq!(summary.test_count(), 2);
        assert!(summary.correlation("c", "b").is_some());
        assert!(summary.correlation("a", "c").is_none());
    }

    #[test]
    fn test_numeric_profile_lookup() {
        let summary = SummaryAssembler::new()
            .with_descriptive(vec![ColumnProfile {
                column: "v".to_string(),
                stats: ProfileStats::Numeric(DescriptiveStats::from_values(&[1.0, 3.0])),
            }])
            .assemble();
        assert_eq!(summary.numeric_profile("v").unwrap().mean, Some(2.0));
        assert!(summary.numeric_profile("w").is_none());
    }

    #[test]
    fn test_empty_summary_json() {
        let json = StatisticalSummary::default().to_json().unwrap();
        assert_eq!(json["correlations"], serde_json::json!([]));
        assert_eq!(json["mean_tests"], serde_json::json!([]));
    }
}
