//! Batch CSV reading.
//!
//! A batch file carries one 2x2 table per row in columns `a`, `b`, `c`,
//! `d`. Headers are matched case-insensitively after trimming whitespace
//! and a UTF-8 BOM; extra columns are ignored.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use sct_model::TableCounts;

use crate::error::{IngestError, Result};

/// Required cell columns, in table order.
pub const CELL_COLUMNS: [&str; 4] = ["a", "b", "c", "d"];

/// Read every row of a batch CSV into table counts.
///
/// Rows are returned in file order; the caller classifies them one by one
/// so that a single non-sparse table never aborts the batch.
pub fn read_batch_csv(path: &Path) -> Result<Vec<TableCounts>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| open_error(path, source))?;

    let headers = reader
        .headers()
        .map_err(|source| csv_read_error(path, source))?
        .clone();
    let indices = resolve_cell_columns(&headers, path)?;

    let mut tables = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| csv_read_error(path, source))?;
        // 1-based file line, counting the header row.
        let row = row_index + 2;
        let a = parse_cell(&record, indices[0], CELL_COLUMNS[0], row, path)?;
        let b = parse_cell(&record, indices[1], CELL_COLUMNS[1], row, path)?;
        let c = parse_cell(&record, indices[2], CELL_COLUMNS[2], row, path)?;
        let d = parse_cell(&record, indices[3], CELL_COLUMNS[3], row, path)?;
        tables.push(TableCounts::new(a, b, c, d));
    }

    debug!(path = %path.display(), rows = tables.len(), "read batch tables");
    Ok(tables)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_lowercase()
}

fn resolve_cell_columns(headers: &StringRecord, path: &Path) -> Result<[usize; 4]> {
    let mut indices = [0usize; 4];
    for (slot, column) in indices.iter_mut().zip(CELL_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| normalize_header(header) == column)
            .ok_or_else(|| IngestError::MissingColumn {
                column,
                path: path.to_path_buf(),
            })?;
    }
    Ok(indices)
}

fn parse_cell(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
    path: &Path,
) -> Result<u64> {
    let raw = record.get(index).unwrap_or("");
    raw.trim()
        .parse::<u64>()
        .map_err(|_| IngestError::InvalidCell {
            column,
            value: raw.to_string(),
            row,
            path: path.to_path_buf(),
        })
}

fn open_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = source.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    csv_read_error(path, source)
}

fn csv_read_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    }
}
