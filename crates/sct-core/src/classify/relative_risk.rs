//! Relative-risk decision tree.
//!
//! Only the `a = 0` and `c = 0` single-zero patterns and the `b = d = 0`
//! family produce anything other than MILD. The `b = d = 0` test takes
//! priority over the wider zero patterns, so tables like (0, 0, c, 0)
//! land on the `a == c` comparison rather than the triple-zero arm.

use sct_model::{GroupTotals, Sparseness, TableCounts, ZeroPattern};

/// Classify under the relative risk.
///
/// The group totals are part of the classifier contract but the published
/// rules never consult them; the parameter stays for symmetry with the
/// risk-difference tree.
pub(crate) fn classify(table: &TableCounts, _totals: GroupTotals) -> Sparseness {
    let TableCounts { a, b, c, d } = *table;

    match table.zero_pattern() {
        ZeroPattern::A => {
            if d > b + c {
                Sparseness::Moderate
            } else {
                Sparseness::Mild
            }
        }
        ZeroPattern::C => {
            if b <= d + a {
                Sparseness::Moderate
            } else {
                Sparseness::Mild
            }
        }
        // b = 0 and d = 0, with a and c unconstrained.
        ZeroPattern::Bd | ZeroPattern::Abd | ZeroPattern::Bcd | ZeroPattern::All => {
            if a == c {
                Sparseness::Mild
            } else {
                Sparseness::Severe
            }
        }
        ZeroPattern::B
        | ZeroPattern::D
        | ZeroPattern::Ab
        | ZeroPattern::Ac
        | ZeroPattern::Ad
        | ZeroPattern::Bc
        | ZeroPattern::Cd
        | ZeroPattern::Abc
        | ZeroPattern::Acd => Sparseness::Mild,
        // Unreachable once the sparseness check has passed.
        ZeroPattern::None => Sparseness::Mild,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(a: u64, b: u64, c: u64, d: u64) -> Sparseness {
        let table = TableCounts::new(a, b, c, d);
        classify(&table, GroupTotals::from(&table))
    }

    #[test]
    fn zero_a_compares_d_against_b_plus_c() {
        assert_eq!(verdict(0, 5, 3, 1), Sparseness::Mild);
        assert_eq!(verdict(0, 5, 3, 8), Sparseness::Mild);
        assert_eq!(verdict(0, 5, 3, 9), Sparseness::Moderate);
    }

    #[test]
    fn zero_c_compares_b_against_d_plus_a() {
        assert_eq!(verdict(2, 7, 0, 4), Sparseness::Mild);
        assert_eq!(verdict(2, 6, 0, 4), Sparseness::Moderate);
        assert_eq!(verdict(2, 1, 0, 4), Sparseness::Moderate);
    }

    #[test]
    fn zero_b_and_d_require_equal_event_counts() {
        assert_eq!(verdict(3, 0, 3, 0), Sparseness::Mild);
        assert_eq!(verdict(3, 0, 5, 0), Sparseness::Severe);
        // The same rule catches the wider patterns containing b = d = 0.
        assert_eq!(verdict(0, 0, 5, 0), Sparseness::Severe);
        assert_eq!(verdict(5, 0, 0, 0), Sparseness::Severe);
        assert_eq!(verdict(0, 0, 0, 0), Sparseness::Mild);
    }

    #[test]
    fn non_sparse_fallback_is_mild() {
        assert_eq!(verdict(1, 1, 1, 1), Sparseness::Mild);
    }

    #[test]
    fn remaining_patterns_are_mild() {
        assert_eq!(verdict(1, 0, 2, 3), Sparseness::Mild);
        assert_eq!(verdict(1, 2, 3, 0), Sparseness::Mild);
        assert_eq!(verdict(0, 0, 2, 3), Sparseness::Mild);
        assert_eq!(verdict(0, 2, 0, 3), Sparseness::Mild);
        assert_eq!(verdict(0, 2, 3, 0), Sparseness::Mild);
        assert_eq!(verdict(1, 0, 0, 3), Sparseness::Mild);
        assert_eq!(verdict(1, 2, 0, 0), Sparseness::Mild);
        assert_eq!(verdict(0, 0, 0, 3), Sparseness::Mild);
        assert_eq!(verdict(0, 3, 0, 0), Sparseness::Mild);
    }
}
