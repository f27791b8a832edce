//! Odds-ratio decision tree.
//!
//! Single-zero patterns compare the cell diagonally opposite the zero
//! against the sum of the two cells adjacent to it; the MODERATE band
//! extends that sum by `m * adj1 * adj2` where `m = 1/epsilon`.
//! Double-zero patterns with a surviving row or column use the
//! `2y(y+1)` bound on the cell farthest from the zeros.

use sct_model::{Sparseness, TableCounts, ZeroPattern};

/// Classify under the odds ratio. `epsilon` must be strictly positive.
pub(crate) fn classify(table: &TableCounts, epsilon: f64) -> Sparseness {
    let m = 1.0 / epsilon;
    let TableCounts { a, b, c, d } = *table;

    match table.zero_pattern() {
        ZeroPattern::A => single_zero(d, b, c, m),
        ZeroPattern::B => single_zero(c, a, d, m),
        ZeroPattern::C => single_zero(b, a, d, m),
        ZeroPattern::D => single_zero(a, b, c, m),
        ZeroPattern::Ab => double_zero(d, c),
        ZeroPattern::Ac => double_zero(d, b),
        ZeroPattern::Ad => Sparseness::Moderate,
        ZeroPattern::Bc => Sparseness::Mild,
        ZeroPattern::Bd => double_zero(a, c),
        ZeroPattern::Cd => double_zero(a, b),
        ZeroPattern::Abc | ZeroPattern::Acd | ZeroPattern::All => Sparseness::Severe,
        ZeroPattern::Abd | ZeroPattern::Bcd => Sparseness::Moderate,
        // Unreachable once the sparseness check has passed.
        ZeroPattern::None => Sparseness::Mild,
    }
}

/// One zero cell: `opposite` sits diagonally across from the zero,
/// `adj1`/`adj2` share its row and column.
fn single_zero(opposite: u64, adj1: u64, adj2: u64, m: f64) -> Sparseness {
    let bound = adj1 + adj2;
    if opposite <= bound {
        Sparseness::Mild
    } else if opposite as f64 <= bound as f64 + m * adj1 as f64 * adj2 as f64 {
        Sparseness::Moderate
    } else {
        Sparseness::Severe
    }
}

/// Two zero cells sharing a row or column: `survivor` is the positive cell
/// farthest from the zeros, `base` the one next to them.
fn double_zero(survivor: u64, base: u64) -> Sparseness {
    if survivor <= 2 * base * (base + 1) {
        Sparseness::Mild
    } else {
        Sparseness::Severe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(a: u64, b: u64, c: u64, d: u64, epsilon: f64) -> Sparseness {
        classify(&TableCounts::new(a, b, c, d), epsilon)
    }

    #[test]
    fn zero_a_bands() {
        // Opposite d = 5, adjacent b = 1, c = 2, m = 2.
        assert_eq!(verdict(0, 1, 2, 3, 0.5), Sparseness::Mild);
        assert_eq!(verdict(0, 1, 2, 5, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(0, 1, 2, 8, 0.5), Sparseness::Severe);
    }

    #[test]
    fn zero_b_bands() {
        // Opposite c, adjacent a and d.
        assert_eq!(verdict(4, 0, 5, 1, 0.5), Sparseness::Mild);
        assert_eq!(verdict(2, 0, 9, 3, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(1, 0, 9, 2, 0.5), Sparseness::Severe);
    }

    #[test]
    fn zero_c_bands() {
        // Opposite b, adjacent a and d.
        assert_eq!(verdict(5, 1, 0, 10, 0.5), Sparseness::Mild);
        assert_eq!(verdict(1, 6, 0, 2, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(1, 8, 0, 2, 0.5), Sparseness::Severe);
    }

    #[test]
    fn zero_d_bands() {
        // Opposite a, adjacent b and c.
        assert_eq!(verdict(3, 1, 2, 0, 0.5), Sparseness::Mild);
        assert_eq!(verdict(5, 1, 2, 0, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(8, 1, 2, 0, 0.5), Sparseness::Severe);
    }

    #[test]
    fn larger_epsilon_narrows_the_moderate_band() {
        // m = 1/eps, so the moderate bound b + c + m*b*c shrinks as eps grows.
        assert_eq!(verdict(0, 1, 2, 5, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(0, 1, 2, 6, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(0, 1, 2, 6, 2.0), Sparseness::Severe);
    }

    #[test]
    fn row_and_column_double_zeros() {
        // Zeros {a, b}: d against 2c(c+1).
        assert_eq!(verdict(0, 0, 2, 12, 0.5), Sparseness::Mild);
        assert_eq!(verdict(0, 0, 2, 13, 0.5), Sparseness::Severe);
        // Zeros {a, c}: d against 2b(b+1).
        assert_eq!(verdict(0, 3, 0, 24, 0.5), Sparseness::Mild);
        assert_eq!(verdict(0, 3, 0, 25, 0.5), Sparseness::Severe);
        // Zeros {b, d}: a against 2c(c+1).
        assert_eq!(verdict(12, 0, 2, 0, 0.5), Sparseness::Mild);
        assert_eq!(verdict(13, 0, 2, 0, 0.5), Sparseness::Severe);
        // Zeros {c, d}: a against 2b(b+1).
        assert_eq!(verdict(4, 1, 0, 0, 0.5), Sparseness::Mild);
        assert_eq!(verdict(5, 1, 0, 0, 0.5), Sparseness::Severe);
    }

    #[test]
    fn diagonal_double_zeros() {
        // Zeros {a, d} leave no mild case; zeros {b, c} leave no severe one.
        assert_eq!(verdict(0, 7, 9, 0, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(7, 0, 0, 9, 0.5), Sparseness::Mild);
    }

    #[test]
    fn non_sparse_fallback_is_mild() {
        // The public entry points reject this input before dispatch; the
        // defensive arm still has a defined answer.
        assert_eq!(verdict(1, 1, 1, 1, 0.5), Sparseness::Mild);
    }

    #[test]
    fn triple_and_quadruple_zeros() {
        assert_eq!(verdict(0, 0, 0, 4, 0.5), Sparseness::Severe);
        assert_eq!(verdict(0, 0, 4, 0, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(0, 4, 0, 0, 0.5), Sparseness::Severe);
        assert_eq!(verdict(4, 0, 0, 0, 0.5), Sparseness::Moderate);
        assert_eq!(verdict(0, 0, 0, 0, 0.5), Sparseness::Severe);
    }
}
