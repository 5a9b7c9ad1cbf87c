//! Column-major tabular data model
//!
//! A [`Dataset`] is an ordered sequence of named columns of equal length.
//! Each column carries an explicit [`ColumnKind`] decided once at ingestion
//! time. Missing cells are `None`, never zero or the empty string.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Declared kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing value is a finite number
    Numeric,
    /// Values are treated as discrete labels
    Categorical,
}

impl ColumnKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed storage for one column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

/// A single cell, as handed to external consumers
///
/// Serializes untagged: numbers as numbers, labels as strings, missing as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a numeric column
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a categorical column
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Number of rows, missing cells included
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing cells
    pub fn valid_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|x| x.is_some()).count(),
            ColumnData::Categorical(v) => v.iter().filter(|x| x.is_some()).count(),
        }
    }

    pub fn missing_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Raw numeric cells, or `None` for a categorical column
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Categorical(_) => None,
        }
    }

    /// Raw label cells, or `None` for a numeric column
    pub fn as_categorical(&self) -> Option<&[Option<String>]> {
        match &self.data {
            ColumnData::Categorical(v) => Some(v),
            ColumnData::Numeric(_) => None,
        }
    }

    /// Non-missing numeric values in row order (empty for categorical columns)
    pub fn numeric_values(&self) -> Vec<f64> {
        self.as_numeric()
            .map(|v| v.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Distinct non-missing labels in order of first appearance
    ///
    /// Empty for numeric columns.
    pub fn distinct_labels(&self) -> Vec<&str> {
        let Some(values) = self.as_categorical() else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        values
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// Cell at `row`
    pub fn cell(&self, row: usize) -> Cell {
        match &self.data {
            ColumnData::Numeric(v) => match v.get(row).copied().flatten() {
                Some(x) => Cell::Number(x),
                None => Cell::Missing,
            },
            ColumnData::Categorical(v) => match v.get(row).cloned().flatten() {
                Some(s) => Cell::Text(s),
                None => Cell::Missing,
            },
        }
    }
}

/// Immutable rectangular table of named, typed columns
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset, checking that all columns have the same length and
    /// unique names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        let mut names = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.len() != row_count {
                return Err(Error::size_mismatch(
                    row_count,
                    column.len(),
                    &format!("column '{}'", column.name()),
                ));
            }
            if !names.insert(column.name()) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// True when there are no cells, or every cell is missing
    pub fn is_all_missing(&self) -> bool {
        self.columns.iter().all(|c| c.valid_count() == 0)
    }

    /// Pairs of present values from two numeric columns, row-aligned
    ///
    /// Rows where either side is missing are dropped.
    pub fn paired_numeric(&self, left: &str, right: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let x = self.numeric_column(left)?;
        let y = self.numeric_column(right)?;
        Ok(x.iter()
            .zip(y)
            .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
            .unzip())
    }

    /// Non-missing values of `numeric` for each label of `categorical`
    ///
    /// Groups follow label first-appearance order. A row contributes only when
    /// both its label and its numeric value are present.
    pub fn grouped_numeric(&self, numeric: &str, categorical: &str) -> Result<Vec<(String, Vec<f64>)>> {
        let values = self.numeric_column(numeric)?;
        let labels_column = self
            .column(categorical)
            .ok_or_else(|| Error::unknown_column(categorical))?;
        let labels = labels_column.as_categorical().ok_or_else(|| {
            Error::InvalidInput(format!("Column '{categorical}' is not categorical"))
        })?;

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
        for (label, value) in labels.iter().zip(values) {
            let Some(label) = label else { continue };
            let slot = *index.entry(label.as_str()).or_insert_with(|| {
                groups.push((label.clone(), Vec::new()));
                groups.len() - 1
            });
            if let Some(value) = value {
                groups[slot].1.push(*value);
            }
        }

        Ok(groups)
    }

    fn numeric_column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.column(name)
            .ok_or_else(|| Error::unknown_column(name))?
            .as_numeric()
            .ok_or_else(|| Error::InvalidInput(format!("Column '{name}' is not numeric")))
    }
}
