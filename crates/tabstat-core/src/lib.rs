//! Core types for tabular statistical analysis
//!
//! This crate holds the pieces every stage of the analysis pipeline shares:
//!
//! - [`Dataset`]: an immutable, column-major table with an explicit
//!   [`ColumnKind`] per column and `None` for missing cells
//! - [`classify`]: the numeric / categorical partition of a dataset
//! - [`math`]: sample moments and interpolated quantiles
//! - [`AnalysisConfig`]: significance level and test eligibility limits
//! - [`Error`], [`ParseError`], [`SkipReason`]: hard failures and soft omissions
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::{classify, Column, Dataset};
//!
//! let dataset = Dataset::new(vec![
//!     Column::categorical("group", vec![Some("A".into()), Some("B".into())]),
//!     Column::numeric("value", vec![Some(10.0), Some(20.0)]),
//! ])
//! .unwrap();
//!
//! let partition = classify(&dataset);
//! assert_eq!(partition.numeric, vec!["value"]);
//! assert_eq!(partition.categorical, vec!["group"]);
//! ```

pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
pub mod math;

pub use classify::{classify, ColumnPartition};
pub use config::{
    AnalysisConfig, DEFAULT_MAX_GROUP_COUNT, DEFAULT_MIN_MEAN_TEST_OBSERVATIONS,
    DEFAULT_SIGNIFICANCE_LEVEL, HYPOTHESIZED_MEAN,
};
pub use dataset::{Cell, Column, ColumnData, ColumnKind, Dataset};
pub use error::{Error, ParseError, Result, SkipReason};
