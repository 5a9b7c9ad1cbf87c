//! Descriptive profiling for tabular datasets
//!
//! - [`DescriptiveProfiler`]: count, mean, sample standard deviation, min,
//!   quartiles and max for numeric columns; count, distinct labels and mode
//!   for categorical columns
//! - [`DatasetOverview`]: shape, per-column missingness and a few leading
//!   rows, for embedding in a narrative prompt
//!
//! Profiling never fails. Columns without present values yield profiles
//! whose statistics are all absent.
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::{Column, Dataset};
//! use tabstat_describe::DescriptiveProfiler;
//!
//! let dataset = Dataset::new(vec![
//!     Column::numeric("value", vec![Some(10.0), Some(12.0), Some(20.0), Some(22.0)]),
//! ])
//! .unwrap();
//!
//! let profiles = DescriptiveProfiler::new().profile(&dataset);
//! let stats = profiles[0].numeric().unwrap();
//! assert_eq!(stats.count, 4);
//! assert_eq!(stats.mean, Some(16.0));
//! ```

mod overview;
mod profile;

pub use overview::{ColumnOverview, DatasetOverview};
pub use profile::{
    CategoricalStats, ColumnProfile, DescriptiveProfiler, DescriptiveStats, ProfileStats,
};
