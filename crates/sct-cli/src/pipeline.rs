//! Batch classification pipeline.
//!
//! Glue between ingestion and the classifier: classify a sequence of
//! tables row by row, accumulate category counts, and export an optional
//! JSON report of the run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use sct_core::classify_with_totals;
use sct_ingest::ClassifiedRecord;
use sct_model::{ClassifyOptions, GroupTotals, Measure, Sparseness, TableCounts};

/// Default file name for the classified batch output.
pub const DEFAULT_OUTPUT_NAME: &str = "classification_results.csv";

const REPORT_SCHEMA: &str = "sct.batch-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Category counts accumulated over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchCounts {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
    /// Rows rejected because every cell was positive.
    pub not_sparse: usize,
}

impl BatchCounts {
    pub fn total(&self) -> usize {
        self.mild + self.moderate + self.severe + self.not_sparse
    }
}

/// Classify a batch of tables row by row.
///
/// Group totals are recomputed per row. A non-sparse row keeps its place
/// in the output with the validation message in its `Class` column; it
/// never aborts the rest of the batch.
pub fn classify_rows(
    tables: &[TableCounts],
    measure: Measure,
    options: &ClassifyOptions,
) -> (Vec<ClassifiedRecord>, BatchCounts) {
    let mut counts = BatchCounts::default();
    let mut records = Vec::with_capacity(tables.len());
    for table in tables {
        let totals = GroupTotals::from(table);
        match classify_with_totals(measure, table, totals, options) {
            Ok(verdict) => {
                match verdict {
                    Sparseness::Mild => counts.mild += 1,
                    Sparseness::Moderate => counts.moderate += 1,
                    Sparseness::Severe => counts.severe += 1,
                }
                records.push(ClassifiedRecord::new(table, verdict.as_str()));
            }
            Err(error) => {
                counts.not_sparse += 1;
                records.push(ClassifiedRecord::new(table, format!("ERROR: {error}")));
            }
        }
    }
    (records, counts)
}

/// Default output path: [`DEFAULT_OUTPUT_NAME`] next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DEFAULT_OUTPUT_NAME)
}

#[derive(Debug, Serialize)]
struct BatchReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    measure: Measure,
    levels: u8,
    epsilon: f64,
    rows: usize,
    counts: BatchCounts,
}

/// Write a JSON summary of a batch run.
pub fn write_batch_report(
    path: &Path,
    measure: Measure,
    options: &ClassifyOptions,
    counts: &BatchCounts,
) -> Result<()> {
    let payload = BatchReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        measure,
        levels: options.levels.as_u8(),
        epsilon: options.epsilon,
        rows: counts.total(),
        counts: *counts,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n"))?;
    info!(path = %path.display(), "wrote batch report");
    Ok(())
}
