//! Group-difference tests for (numeric, categorical) column pairs

use crate::distributions::{f_upper_tail, students_t_two_sided};
use crate::interpretation::{describe_multi_sample, describe_two_sample};
use crate::traits::PairwiseAnalyzer;
use crate::types::{GroupComparisonResult, GroupMean, MultiSampleResult, TwoSampleResult};
use tabstat_core::math::moments;
use tabstat_core::{
    AnalysisConfig, ColumnKind, ColumnPartition, Dataset, SkipReason, DEFAULT_MAX_GROUP_COUNT,
    DEFAULT_SIGNIFICANCE_LEVEL,
};

/// Outcome of Student's t-test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

/// Outcome of a one-way ANOVA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaTest {
    pub f_statistic: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub p_value: f64,
}

/// Independent two-sample t-test assuming equal variances
///
/// Pooled variance over `n1 + n2 - 2` degrees of freedom; two-sided p-value.
pub fn student_t_test(a: &[f64], b: &[f64]) -> Result<TTest, SkipReason> {
    let (n1, n2) = (a.len(), b.len());
    if n1 < 2 || n2 < 2 {
        return Err(SkipReason::InsufficientObservations {
            required: 2,
            actual: n1.min(n2),
        });
    }
    let mean_a = moments::mean(a).unwrap_or_default();
    let mean_b = moments::mean(b).unwrap_or_default();

    let df = (n1 + n2 - 2) as f64;
    let pooled = (moments::sum_of_squares(a) + moments::sum_of_squares(b)) / df;
    let standard_error = (pooled * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();
    let t = (mean_a - mean_b) / standard_error;
    if !t.is_finite() {
        return Err(SkipReason::NonFiniteStatistic("t statistic"));
    }

    Ok(TTest {
        t_statistic: t,
        degrees_of_freedom: df,
        p_value: students_t_two_sided(t, df)?,
    })
}

/// One-way ANOVA F-test of equal means across `groups`
pub fn one_way_anova(groups: &[&[f64]]) -> Result<AnovaTest, SkipReason> {
    let k = groups.len();
    if k < 2 {
        return Err(SkipReason::TooFewGroups { found: k });
    }
    let total: usize = groups.iter().map(|g| g.len()).sum();
    if groups.iter().any(|g| g.is_empty()) || total <= k {
        return Err(SkipReason::InsufficientObservations {
            required: k + 1,
            actual: total,
        });
    }

    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / total as f64;
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let mean = moments::mean(group).unwrap_or_default();
        ss_between += group.len() as f64 * (mean - grand_mean).powi(2);
        ss_within += moments::sum_of_squares(group);
    }

    let df_between = (k - 1) as f64;
    let df_within = (total - k) as f64;
    let f = (ss_between / df_between) / (ss_within / df_within);
    if !f.is_finite() {
        return Err(SkipReason::NonFiniteStatistic("F statistic"));
    }

    Ok(AnovaTest {
        f_statistic: f,
        df_between,
        df_within,
        p_value: f_upper_tail(f, df_between, df_within)?,
    })
}

/// Chooses and runs a group-difference test per (numeric, categorical) pair
///
/// Two labels get Student's t-test. Three up to `max_group_count` labels get
/// a one-way ANOVA. Every group must keep at least two observations, or the
/// whole pair is skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupComparisonEngine {
    significance_level: f64,
    max_group_count: usize,
}

impl Default for GroupComparisonEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_LEVEL, DEFAULT_MAX_GROUP_COUNT)
    }
}

impl GroupComparisonEngine {
    pub fn new(significance_level: f64, max_group_count: usize) -> Self {
        Self {
            significance_level,
            max_group_count,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.significance_level, config.max_group_count)
    }

    pub fn max_group_count(&self) -> usize {
        self.max_group_count
    }

    fn two_sample(
        &self,
        numeric: &str,
        categorical: &str,
        (label1, values1): &(String, Vec<f64>),
        (label2, values2): &(String, Vec<f64>),
    ) -> Result<GroupComparisonResult, SkipReason> {
        let test = student_t_test(values1, values2)?;
        Ok(GroupComparisonResult::TwoSample(TwoSampleResult {
            categorical_column: categorical.to_string(),
            numeric_column: numeric.to_string(),
            group1: label1.clone(),
            group2: label2.clone(),
            group1_size: values1.len(),
            group2_size: values2.len(),
            t_statistic: test.t_statistic,
            degrees_of_freedom: test.degrees_of_freedom,
            p_value: test.p_value,
            interpretation: describe_two_sample(
                numeric,
                label1,
                label2,
                test.p_value,
                self.significance_level,
            ),
        }))
    }

    fn multi_sample(
        &self,
        numeric: &str,
        categorical: &str,
        groups: &[(String, Vec<f64>)],
    ) -> Result<GroupComparisonResult, SkipReason> {
        let samples: Vec<&[f64]> = groups.iter().map(|(_, v)| v.as_slice()).collect();
        let test = one_way_anova(&samples)?;
        let group_means = groups
            .iter()
            .map(|(label, values)| GroupMean {
                label: label.clone(),
                mean: moments::mean(values).unwrap_or_default(),
                count: values.len(),
            })
            .collect();

        Ok(GroupComparisonResult::MultiSample(MultiSampleResult {
            categorical_column: categorical.to_string(),
            numeric_column: numeric.to_string(),
            f_statistic: test.f_statistic,
            df_between: test.df_between,
            df_within: test.df_within,
            p_value: test.p_value,
            interpretation: describe_multi_sample(
                numeric,
                categorical,
                groups.len(),
                test.p_value,
                self.significance_level,
            ),
            group_means,
        }))
    }
}

impl PairwiseAnalyzer for GroupComparisonEngine {
    type Output = GroupComparisonResult;

    fn name(&self) -> &'static str {
        "group_comparison"
    }

    /// `(numeric, categorical)`, numeric-major
    fn pairs<'a>(&self, partition: &'a ColumnPartition) -> Vec<(&'a str, &'a str)> {
        partition.numeric_by_categorical()
    }

    fn analyze_pair(
        &self,
        dataset: &Dataset,
        numeric: &str,
        categorical: &str,
    ) -> Result<GroupComparisonResult, SkipReason> {
        let labels = dataset
            .column(categorical)
            .ok_or_else(|| SkipReason::Column(format!("Column '{categorical}' not found")))?;
        if labels.kind() != ColumnKind::Categorical {
            return Err(SkipReason::Column(format!("'{categorical}' is not categorical")));
        }
        let k = labels.distinct_labels().len();
        if k < 2 {
            return Err(SkipReason::TooFewGroups { found: k });
        }
        if k > self.max_group_count {
            return Err(SkipReason::TooManyGroups {
                found: k,
                max: self.max_group_count,
            });
        }

        let groups = dataset
            .grouped_numeric(numeric, categorical)
            .map_err(|e| SkipReason::Column(e.to_string()))?;
        if let Some((label, values)) = groups.iter().find(|(_, v)| v.len() < 2) {
            return Err(SkipReason::GroupTooSmall {
                label: label.clone(),
                size: values.len(),
            });
        }
        if groups.iter().all(|(_, v)| moments::is_constant(v)) {
            return Err(SkipReason::ZeroVariance {
                column: numeric.to_string(),
            });
        }

        match groups.as_slice() {
            [first, second] => self.two_sample(numeric, categorical, first, second),
            _ => self.multi_sample(numeric, categorical, &groups),
        }
    }
}
