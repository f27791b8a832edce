use thiserror::Error;

/// Returned when a table has no zero cell.
///
/// The classification methodology is defined only for sparse tables, so a
/// table with four positive cells is rejected before any decision tree runs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("this tool applies only to sparse tables (at least one zero cell)")]
pub struct SparseTableError;

pub type Result<T> = std::result::Result<T, SparseTableError>;
