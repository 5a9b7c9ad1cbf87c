//! Numeric / categorical column partition

use crate::{ColumnKind, Dataset};
use serde::{Deserialize, Serialize};

/// Column names split by kind, each list in original column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPartition {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnPartition {
    /// Unordered pairs of distinct numeric columns, `(i, j)` with `i < j`
    pub fn numeric_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, left) in self.numeric.iter().enumerate() {
            for right in &self.numeric[i + 1..] {
                pairs.push((left.as_str(), right.as_str()));
            }
        }
        pairs
    }

    /// Every `(numeric, categorical)` pair, numeric-major
    pub fn numeric_by_categorical(&self) -> Vec<(&str, &str)> {
        self.numeric
            .iter()
            .flat_map(|n| self.categorical.iter().map(move |c| (n.as_str(), c.as_str())))
            .collect()
    }
}

/// Partition a dataset's columns by their declared kind
pub fn classify(dataset: &Dataset) -> ColumnPartition {
    let mut partition = ColumnPartition::default();
    for column in dataset.columns() {
        match column.kind() {
            ColumnKind::Numeric => partition.numeric.push(column.name().to_string()),
            ColumnKind::Categorical => partition.categorical.push(column.name().to_string()),
        }
    }
    partition
}
