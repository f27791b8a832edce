//! Classified batch CSV export.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sct_model::TableCounts;

use crate::error::{IngestError, Result};

/// One output row: the input cells plus the assigned label.
///
/// `class` carries either a sparseness label or the validation message for
/// a row that was not sparse; invalid rows keep their place in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
    #[serde(rename = "Class")]
    pub class: String,
}

impl ClassifiedRecord {
    pub fn new(table: &TableCounts, class: impl Into<String>) -> Self {
        Self {
            a: table.a,
            b: table.b,
            c: table.c,
            d: table.d,
            class: class.into(),
        }
    }
}

/// Write classified rows with an `a,b,c,d,Class` header.
pub fn write_classified_csv(path: &Path, records: &[ClassifiedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| IngestError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = records.len(), "wrote classified tables");
    Ok(())
}
