//! Batch ingestion for 2x2 contingency tables.
//!
//! Reads batch CSV files (columns `a`, `b`, `c`, `d`, one table per row)
//! into [`sct_model::TableCounts`] and writes classification results back
//! out with an appended `Class` column.

mod error;
mod reader;
mod writer;

pub use error::{IngestError, Result};
pub use reader::{CELL_COLUMNS, read_batch_csv};
pub use writer::{ClassifiedRecord, write_classified_csv};
