//! Delimited-text ingestion for tabular statistical analysis
//!
//! [`TableIngestor`] turns a block of raw CSV or TSV text into a
//! [`tabstat_core::Dataset`]:
//!
//! - the delimiter is sniffed from the first non-empty line (comma unless
//!   that line has more tabs than commas), or forced via [`IngestOptions`]
//! - a strict parse is tried first; on a ragged table a lenient pass drops
//!   over-wide rows and pads short ones
//! - placeholder headers (`Unnamed…`, empty) drop their column and repeated
//!   names are suffixed `.1`, `.2`, …
//! - each column is numeric only if every present cell is a finite number
//!
//! Empty input, a table without rows, a table without usable columns and a
//! table whose cells are all missing are hard [`tabstat_core::ParseError`]s.

mod delimiter;
mod header;
mod infer;
mod ingestor;
mod options;

pub use delimiter::sniff_delimiter;
pub use header::is_placeholder;
pub use ingestor::TableIngestor;
pub use options::IngestOptions;

/// Parse `text` with default options
pub fn ingest(text: &str) -> tabstat_core::Result<tabstat_core::Dataset> {
    TableIngestor::new().ingest(text)
}
