//! Raw delimited text to [`Dataset`]

use crate::delimiter::sniff_delimiter;
use crate::header::normalize_headers;
use crate::infer::build_column;
use crate::IngestOptions;
use csv::{ReaderBuilder, StringRecord, Trim};
use tabstat_core::{Dataset, ParseError, Result};
use tracing::{debug, instrument, warn};

/// Header plus data rows, before typing
///
/// A `None` cell was absent from a short row.
#[derive(Debug)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Parses raw delimited text into a typed, rectangular dataset
///
/// ```rust
/// use tabstat_ingest::TableIngestor;
/// use tabstat_core::ColumnKind;
///
/// let dataset = TableIngestor::new()
///     .ingest("group,value\nA,10\nA,12\nB,20\nB,22\n")
///     .unwrap();
/// assert_eq!(dataset.row_count(), 4);
/// assert_eq!(dataset.column("group").unwrap().kind(), ColumnKind::Categorical);
/// assert_eq!(dataset.column("value").unwrap().kind(), ColumnKind::Numeric);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableIngestor {
    options: IngestOptions,
}

impl TableIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: IngestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Parse `text` into a dataset
    ///
    /// Fails with [`ParseError`] when the text is empty, has no usable
    /// columns, has no data rows, or every cell is missing. Malformed rows
    /// are dropped rather than failing the whole parse.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn ingest(&self, text: &str) -> Result<Dataset> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let delimiter = self.options.delimiter.unwrap_or_else(|| sniff_delimiter(text));
        debug!(delimiter = %(delimiter as char).escape_default(), "using delimiter");

        let table = match self.read_strict(text, delimiter) {
            Ok(table) => table,
            Err(e) => {
                debug!(error = %e, "strict parse failed, retrying leniently");
                self.read_lenient(text, delimiter)?
            }
        };

        self.build(table)
    }

    fn reader_builder(&self, delimiter: u8, flexible: bool) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(flexible)
            .trim(if self.options.trim_whitespace { Trim::All } else { Trim::None });
        builder
    }

    /// Every row must match the header width
    fn read_strict(&self, text: &str, delimiter: u8) -> std::result::Result<RawTable, csv::Error> {
        let mut reader = self.reader_builder(delimiter, false).from_reader(text.as_bytes());
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| Some(cell.to_string())).collect());
        }

        Ok(RawTable { headers, rows })
    }

    /// Drop rows that are too wide or unreadable; pad rows that are too short
    fn read_lenient(&self, text: &str, delimiter: u8) -> Result<RawTable> {
        let mut reader = self.reader_builder(delimiter, true).from_reader(text.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ParseError::Malformed {
                line: 1,
                message: e.to_string(),
            })?
            .iter()
            .map(str::to_string)
            .collect();
        let width = headers.len();

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "dropping unreadable row");
                    dropped += 1;
                    continue;
                }
            };
            if record.len() > width {
                warn!(
                    line = record_line(&record),
                    fields = record.len(),
                    expected = width,
                    "dropping malformed row"
                );
                dropped += 1;
                continue;
            }
            let mut row: Vec<Option<String>> =
                record.iter().map(|cell| Some(cell.to_string())).collect();
            row.resize(width, None);
            rows.push(row);
        }

        if dropped > 0 {
            debug!(dropped, kept = rows.len(), "lenient parse finished");
        }
        Ok(RawTable { headers, rows })
    }

    fn build(&self, table: RawTable) -> Result<Dataset> {
        let RawTable { headers, rows } = table;
        let names = normalize_headers(&headers);

        let mut columns = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            let Some(name) = name else {
                warn!(column = %headers[index], index, "dropping placeholder column");
                continue;
            };
            let cells = rows.iter().map(|row| row[index].clone()).collect();
            columns.push(build_column(name, cells, &self.options));
        }

        if columns.is_empty() {
            return Err(ParseError::NoColumns.into());
        }
        if rows.is_empty() {
            return Err(ParseError::NoRows.into());
        }

        let dataset = Dataset::new(columns)?;
        if dataset.is_all_missing() {
            return Err(ParseError::AllMissing.into());
        }

        debug!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "ingested table"
        );
        Ok(dataset)
    }
}
