//! Column kind inference
//!
//! A column is numeric only when every non-missing cell parses as a finite
//! number. One stray label turns the whole column categorical. A column with
//! no present cells at all is numeric.

use crate::IngestOptions;
use tabstat_core::Column;

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Build a typed column from raw cell text
///
/// `None` cells are absent from the source row (short records); cells equal
/// to a null marker are missing as well.
pub fn build_column(name: String, cells: Vec<Option<String>>, options: &IngestOptions) -> Column {
    let present: Vec<Option<String>> = cells
        .into_iter()
        .map(|cell| cell.filter(|text| !options.is_null(text)))
        .collect();

    let numeric: Option<Vec<Option<f64>>> = present
        .iter()
        .map(|cell| match cell {
            Some(text) => parse_number(text).map(Some),
            None => Some(None),
        })
        .collect();

    match numeric {
        Some(values) => Column::numeric(name, values),
        None => Column::categorical(name, present),
    }
}
