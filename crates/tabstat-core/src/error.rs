//! Error types for tabular statistical analysis
//!
//! Two failure classes exist. [`ParseError`] and [`Error`] are hard failures
//! that stop the pipeline. [`SkipReason`] is a soft omission: a single test
//! whose statistical preconditions were not met. Callers treat a skipped
//! test as "not applicable", never as "failed".

use thiserror::Error;

/// Input text could not be interpreted as a table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input was empty or contained only whitespace
    #[error("input is empty")]
    EmptyInput,

    /// No usable column survived header cleanup
    #[error("table has no usable columns")]
    NoColumns,

    /// Header parsed but no data rows followed
    #[error("table has no data rows")]
    NoRows,

    /// Every cell in the table is missing
    #[error("every cell in the table is missing")]
    AllMissing,

    /// Header row itself could not be read
    #[error("malformed table at line {line}: {message}")]
    Malformed { line: u64, message: String },
}

/// Core error type for tabular analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Raw text is not a table
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Summary could not be converted to a key/value structure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for mismatched column lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for an unknown column name
    pub fn unknown_column(name: &str) -> Self {
        Self::InvalidInput(format!("Unknown column '{name}'"))
    }
}

/// Why a single statistical test was not run
///
/// Returned as the `Err` side of every per-test attempt. The assembler keeps
/// only successes; reasons are logged for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Not enough non-missing observations
    #[error("needs at least {required} observations, found {actual}")]
    InsufficientObservations { required: usize, actual: usize },

    /// A column (or pooled group) has no variance
    #[error("'{column}' has zero variance")]
    ZeroVariance { column: String },

    /// Categorical factor has fewer than two labels
    #[error("found {found} distinct groups, need at least 2")]
    TooFewGroups { found: usize },

    /// Categorical factor has too many labels to be a readable factor
    #[error("found {found} distinct groups, maximum is {max}")]
    TooManyGroups { found: usize, max: usize },

    /// One group has one or zero observations
    #[error("group '{label}' has only {size} observation(s)")]
    GroupTooSmall { label: String, size: usize },

    /// Reference distribution could not be constructed
    #[error("distribution error: {0}")]
    Distribution(String),

    /// Test statistic was NaN or infinite
    #[error("{0} is not finite")]
    NonFiniteStatistic(&'static str),

    /// Column lookup failed for the requested pair
    #[error("column unavailable: {0}")]
    Column(String),
}

impl SkipReason {
    /// Numerical trouble rather than an unmet precondition
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::Distribution(_) | Self::NonFiniteStatistic(_) | Self::Column(_)
        )
    }
}
