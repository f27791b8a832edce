//! 2x2 contingency table counts and their zero-cell structure.
//!
//! Cell layout (rows are exposure groups, columns are outcomes):
//!
//! ```text
//!             event   no event
//! treated       a        b      | nt = a + b
//! control       c        d      | nc = c + d
//! ```

use serde::{Deserialize, Serialize};

/// Cell counts of a 2x2 contingency table.
///
/// Immutable value type; every classification call derives what it needs
/// from these four counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableCounts {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl TableCounts {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Row total of the treated group (nt).
    pub fn treated_total(&self) -> u64 {
        self.a + self.b
    }

    /// Row total of the control group (nc).
    pub fn control_total(&self) -> u64 {
        self.c + self.d
    }

    /// Returns true if at least one cell is zero.
    pub fn is_sparse(&self) -> bool {
        self.a == 0 || self.b == 0 || self.c == 0 || self.d == 0
    }

    /// Identify which subset of the four cells is zero.
    pub fn zero_pattern(&self) -> ZeroPattern {
        match (self.a == 0, self.b == 0, self.c == 0, self.d == 0) {
            (false, false, false, false) => ZeroPattern::None,
            (true, false, false, false) => ZeroPattern::A,
            (false, true, false, false) => ZeroPattern::B,
            (false, false, true, false) => ZeroPattern::C,
            (false, false, false, true) => ZeroPattern::D,
            (true, true, false, false) => ZeroPattern::Ab,
            (true, false, true, false) => ZeroPattern::Ac,
            (true, false, false, true) => ZeroPattern::Ad,
            (false, true, true, false) => ZeroPattern::Bc,
            (false, true, false, true) => ZeroPattern::Bd,
            (false, false, true, true) => ZeroPattern::Cd,
            (true, true, true, false) => ZeroPattern::Abc,
            (true, true, false, true) => ZeroPattern::Abd,
            (true, false, true, true) => ZeroPattern::Acd,
            (false, true, true, true) => ZeroPattern::Bcd,
            (true, true, true, true) => ZeroPattern::All,
        }
    }
}

/// The subset of cells {a, b, c, d} that equal zero.
///
/// The decision trees dispatch on this enumeration so that branch priority
/// and exhaustiveness stay auditable. `None` means the table is not sparse;
/// the validator rejects it before any classifier sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroPattern {
    /// No zero cell (not a sparse table).
    None,
    A,
    B,
    C,
    D,
    Ab,
    Ac,
    Ad,
    Bc,
    Bd,
    Cd,
    Abc,
    Abd,
    Acd,
    Bcd,
    /// All four cells are zero.
    All,
}

impl ZeroPattern {
    /// Number of zero cells in the pattern.
    pub fn zero_count(&self) -> u8 {
        match self {
            ZeroPattern::None => 0,
            ZeroPattern::A | ZeroPattern::B | ZeroPattern::C | ZeroPattern::D => 1,
            ZeroPattern::Ab
            | ZeroPattern::Ac
            | ZeroPattern::Ad
            | ZeroPattern::Bc
            | ZeroPattern::Bd
            | ZeroPattern::Cd => 2,
            ZeroPattern::Abc | ZeroPattern::Abd | ZeroPattern::Acd | ZeroPattern::Bcd => 3,
            ZeroPattern::All => 4,
        }
    }
}

/// Derived row totals, carried alongside the cells by the RR and RD
/// classifiers.
///
/// Batch callers recompute these per row; single-table callers derive them
/// from the counts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Treated group total (a + b).
    pub nt: u64,
    /// Control group total (c + d).
    pub nc: u64,
}

impl From<&TableCounts> for GroupTotals {
    fn from(table: &TableCounts) -> Self {
        Self {
            nt: table.treated_total(),
            nc: table.control_total(),
        }
    }
}
