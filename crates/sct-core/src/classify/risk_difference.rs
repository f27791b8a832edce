//! Risk-difference decision tree.
//!
//! The two column-zero patterns ({a, c} and {b, d} with both other cells
//! positive) hinge on whether the group totals agree; triple zeros are
//! always SEVERE; everything else, including the empty table, is MILD.

use sct_model::{GroupTotals, Sparseness, TableCounts, ZeroPattern};

/// Classify under the risk difference.
pub(crate) fn classify(table: &TableCounts, totals: GroupTotals) -> Sparseness {
    match table.zero_pattern() {
        ZeroPattern::Ac | ZeroPattern::Bd => {
            if totals.nt == totals.nc {
                Sparseness::Mild
            } else {
                Sparseness::Severe
            }
        }
        ZeroPattern::A | ZeroPattern::B | ZeroPattern::C | ZeroPattern::D => Sparseness::Mild,
        ZeroPattern::Ab | ZeroPattern::Ad | ZeroPattern::Bc | ZeroPattern::Cd => Sparseness::Mild,
        ZeroPattern::Abc | ZeroPattern::Abd | ZeroPattern::Acd | ZeroPattern::Bcd => {
            Sparseness::Severe
        }
        ZeroPattern::All => Sparseness::Mild,
        // Unreachable once the sparseness check has passed.
        ZeroPattern::None => Sparseness::Mild,
    }
}
