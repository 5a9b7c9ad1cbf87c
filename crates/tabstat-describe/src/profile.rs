//! Per-column descriptive statistics

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tabstat_core::math::{moments, quantiles};
use tabstat_core::{Column, ColumnData, Dataset};
use tracing::{debug, instrument};

/// Summary of a numeric column
///
/// Every statistic is `None` when the column has no present values; `std`
/// is also `None` below two values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Non-missing values
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl DescriptiveStats {
    /// Compute from non-missing values
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let sorted = quantiles::sorted(values);
        Self {
            count: values.len(),
            mean: moments::mean(values),
            std: moments::sample_std(values),
            min: sorted.first().copied(),
            p25: quantiles::quantile_sorted(&sorted, 0.25),
            p50: quantiles::quantile_sorted(&sorted, 0.5),
            p75: quantiles::quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// Interquartile range, when quartiles exist
    pub fn iqr(&self) -> Option<f64> {
        Some(self.p75? - self.p25?)
    }
}

/// Summary of a categorical column, for reporting only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoricalStats {
    /// Non-missing values
    pub count: usize,
    /// Distinct labels
    pub unique: usize,
    /// Most frequent label; ties go to the label seen first
    pub top: Option<String>,
    /// Occurrences of `top`
    pub freq: usize,
}

impl CategoricalStats {
    pub fn from_labels(labels: &[Option<String>]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for label in labels.iter().flatten() {
            let entry = counts.entry(label.as_str()).or_insert_with(|| {
                order.push(label.as_str());
                0
            });
            *entry += 1;
        }

        let mut top: Option<(&str, usize)> = None;
        for &label in &order {
            let n = counts[label];
            if top.map_or(true, |(_, best)| n > best) {
                top = Some((label, n));
            }
        }

        Self {
            count: labels.iter().flatten().count(),
            unique: order.len(),
            top: top.map(|(label, _)| label.to_string()),
            freq: top.map_or(0, |(_, n)| n),
        }
    }
}

/// Statistics for one column, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileStats {
    Numeric(DescriptiveStats),
    Categorical(CategoricalStats),
}

/// Named column profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub column: String,
    #[serde(flatten)]
    pub stats: ProfileStats,
}

impl ColumnProfile {
    pub fn numeric(&self) -> Option<&DescriptiveStats> {
        match &self.stats {
            ProfileStats::Numeric(stats) => Some(stats),
            ProfileStats::Categorical(_) => None,
        }
    }

    pub fn categorical(&self) -> Option<&CategoricalStats> {
        match &self.stats {
            ProfileStats::Categorical(stats) => Some(stats),
            ProfileStats::Numeric(_) => None,
        }
    }
}

/// Computes descriptive profiles for every column of a dataset
///
/// Never fails: a column without present values gets an all-`None` profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptiveProfiler;

impl DescriptiveProfiler {
    pub fn new() -> Self {
        Self
    }

    pub fn profile_column(&self, column: &Column) -> ColumnProfile {
        let stats = match column.data() {
            ColumnData::Numeric(_) => {
                ProfileStats::Numeric(DescriptiveStats::from_values(&column.numeric_values()))
            }
            ColumnData::Categorical(labels) => {
                ProfileStats::Categorical(CategoricalStats::from_labels(labels))
            }
        };
        ColumnProfile {
            column: column.name().to_string(),
            stats,
        }
    }

    /// Profiles in column order
    #[instrument(skip_all, fields(columns = dataset.column_count()))]
    pub fn profile(&self, dataset: &Dataset) -> Vec<ColumnProfile> {
        let profiles: Vec<ColumnProfile> = dataset
            .columns()
            .iter()
            .map(|column| self.profile_column(column))
            .collect();
        debug!(profiled = profiles.len(), "descriptive profiling finished");
        profiles
    }
}
