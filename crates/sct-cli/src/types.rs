//! Result types shared across commands.

use std::path::PathBuf;

use sct_cli::pipeline::BatchCounts;
use sct_model::{ClassifyOptions, Measure};

/// Outcome of a batch run, rendered by the summary printer.
pub struct BatchResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub measure: Measure,
    pub options: ClassifyOptions,
    pub counts: BatchCounts,
}
