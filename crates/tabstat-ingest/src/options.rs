//! Ingestion options

use serde::{Deserialize, Serialize};

/// Cell contents treated as missing
const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "none",
    "#N/A", "#NA", "<NA>",
];

/// Rows included in the dataset overview sample
const DEFAULT_SAMPLE_ROWS: usize = 5;

/// How raw text is turned into a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Force a delimiter instead of sniffing it from the first line
    pub delimiter: Option<u8>,
    /// Exact cell contents meaning "missing"
    pub null_markers: Vec<String>,
    /// Trim surrounding whitespace from headers and cells
    pub trim_whitespace: bool,
    /// Leading rows rendered in the dataset overview
    pub sample_rows: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| (*s).to_string()).collect(),
            trim_whitespace: true,
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Replace the default null markers
    pub fn with_null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    pub(crate) fn is_null(&self, cell: &str) -> bool {
        self.null_markers.iter().any(|m| m == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_null_markers() {
        let options = IngestOptions::default();
        for marker in ["", "NA", "NaN", "null", "None", "#N/A"] {
            assert!(options.is_null(marker), "{marker:?} should be missing");
        }
        assert!(!options.is_null("0"));
        assert!(!options.is_null("n"));
    }

    #[test]
    fn test_custom_null_markers() {
        let options = IngestOptions::new().with_null_markers(["-"]);
        assert!(options.is_null("-"));
        assert!(!options.is_null(""));
    }

    #[test]
    fn test_builder() {
        let options = IngestOptions::new()
            .with_delimiter(b';')
            .with_trim_whitespace(false)
            .with_sample_rows(2);
        assert_eq!(options.delimiter, Some(b';'));
        assert!(!options.trim_whitespace);
        assert_eq!(options.sample_rows, 2);
    }
}
