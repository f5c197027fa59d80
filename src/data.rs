//! CSV ingestion into transaction rows using Polars
//!
//! Every CSV row is one transaction and every non-null cell one item. Cells
//! are read as strings, so numeric labels keep their textual form.

use crate::index::TransactionIndex;
use anyhow::Context;
use polars::prelude::*;
use tracing::{debug, warn};

/// Raw transaction rows; `None` marks a missing cell.
pub type Rows = Vec<Vec<Option<String>>>;

/// Load a CSV file into raw transaction rows.
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `has_header` - Whether the first line holds column names instead of items
///
/// # Returns
/// * One row per transaction, in file order
pub fn load_rows(file_path: &str, has_header: bool) -> crate::Result<Rows> {
    let df = CsvReadOptions::default()
        .with_has_header(has_header)
        // no inference: every column is read as a string column
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(file_path.into()))
        .with_context(|| format!("failed to open {file_path}"))?
        .finish()
        .with_context(|| format!("failed to parse {file_path}"))?;

    let rows = frame_to_rows(&df)?;
    if rows.is_empty() {
        warn!(file = file_path, "input contains no transactions");
    }
    debug!(file = file_path, rows = rows.len(), columns = df.width(), "loaded csv");
    Ok(rows)
}

/// Load a CSV file and build its transaction index.
pub fn load_and_index(file_path: &str, has_header: bool) -> crate::Result<(Rows, TransactionIndex)> {
    let rows = load_rows(file_path, has_header)?;
    let index = TransactionIndex::from_rows(rows.iter().map(|row| row.iter().map(Option::as_deref)));
    Ok((rows, index))
}

/// Convert a frame into row-major optional strings.
fn frame_to_rows(df: &DataFrame) -> crate::Result<Rows> {
    let columns: Vec<Series> = df
        .get_columns()
        .iter()
        .map(|column| column.as_materialized_series().cast(&DataType::String))
        .collect::<PolarsResult<_>>()?;
    let columns: Vec<&StringChunked> = columns
        .iter()
        .map(|series| series.str())
        .collect::<PolarsResult<_>>()?;

    let rows: Rows = (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|column| column.get(row).map(str::to_owned))
                .collect()
        })
        .collect();
    Ok(rows)
}
