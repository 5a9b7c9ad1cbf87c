//! Prompt-ready dataset snapshot

use serde::{Deserialize, Serialize};
use tabstat_core::{Cell, ColumnKind, Dataset};

/// Shape and missingness of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOverview {
    pub name: String,
    pub kind: ColumnKind,
    pub missing: usize,
}

/// Deterministic snapshot of a dataset for downstream narrative generation
///
/// `sample_rows` holds the leading rows, each cell aligned with `columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnOverview>,
    pub sample_rows: Vec<Vec<Cell>>,
}

impl DatasetOverview {
    /// Snapshot `dataset`, keeping at most `max_rows` sample rows
    pub fn from_dataset(dataset: &Dataset, max_rows: usize) -> Self {
        let columns = dataset
            .columns()
            .iter()
            .map(|c| ColumnOverview {
                name: c.name().to_string(),
                kind: c.kind(),
                missing: c.missing_count(),
            })
            .collect();

        let sample_rows = (0..dataset.row_count().min(max_rows))
            .map(|row| dataset.columns().iter().map(|c| c.cell(row)).collect())
            .collect();

        Self {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            columns,
            sample_rows,
        }
    }

    /// Total missing cells across all columns
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }
}
