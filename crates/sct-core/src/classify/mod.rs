//! Sparseness classification of 2x2 tables with zero cells.
//!
//! Each summary measure carries its own decision tree; the modules below
//! implement one tree each over the table's [`sct_model::ZeroPattern`].
//! This module validates the table, dispatches on the measure, and folds
//! the raw verdict into the requested level space.

mod odds_ratio;
mod relative_risk;
mod risk_difference;

use tracing::debug;

use sct_model::{
    ClassifyOptions, GroupTotals, Measure, Result, Sparseness, SparseTableError, TableCounts,
};

/// Reject tables without a zero cell.
///
/// Runs before any decision tree; a table with four positive cells is
/// outside the methodology and yields [`SparseTableError`] instead of a
/// category.
pub fn ensure_sparse(table: &TableCounts) -> Result<()> {
    if table.is_sparse() {
        Ok(())
    } else {
        Err(SparseTableError)
    }
}

/// Classify a sparse table, deriving the group totals from its cells.
pub fn classify(
    measure: Measure,
    table: &TableCounts,
    options: &ClassifyOptions,
) -> Result<Sparseness> {
    classify_with_totals(measure, table, GroupTotals::from(table), options)
}

/// Classify a sparse table with caller-supplied group totals.
///
/// Batch callers recompute the totals per row. Only the risk-difference
/// tree consults them; the relative-risk tree accepts them for interface
/// symmetry.
pub fn classify_with_totals(
    measure: Measure,
    table: &TableCounts,
    totals: GroupTotals,
    options: &ClassifyOptions,
) -> Result<Sparseness> {
    ensure_sparse(table)?;
    let raw = match measure {
        Measure::OddsRatio => odds_ratio::classify(table, options.epsilon),
        Measure::RelativeRisk => relative_risk::classify(table, totals),
        Measure::RiskDifference => risk_difference::classify(table, totals),
    };
    debug!(
        %measure,
        a = table.a,
        b = table.b,
        c = table.c,
        d = table.d,
        verdict = %raw,
        "classified table"
    );
    Ok(raw.collapse(options.levels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sct_model::Levels;

    #[test]
    fn rejects_fully_positive_table() {
        let table = TableCounts::new(1, 2, 3, 4);
        for measure in Measure::all() {
            let result = classify(measure, &table, &ClassifyOptions::default());
            assert_eq!(result, Err(SparseTableError));
        }
    }

    #[test]
    fn accepts_any_table_with_a_zero_cell() {
        let table = TableCounts::new(5, 1, 0, 10);
        assert!(ensure_sparse(&table).is_ok());
        for measure in Measure::all() {
            assert!(classify(measure, &table, &ClassifyOptions::default()).is_ok());
        }
    }

    #[test]
    fn two_level_mode_collapses_the_verdict() {
        // OR on (0, 1, 2, 5) is MODERATE at three levels.
        let table = TableCounts::new(0, 1, 2, 5);
        let three = classify(Measure::OddsRatio, &table, &ClassifyOptions::default()).unwrap();
        assert_eq!(three, Sparseness::Moderate);
        let two = classify(
            Measure::OddsRatio,
            &table,
            &ClassifyOptions::default().with_levels(Levels::Two),
        )
        .unwrap();
        assert_eq!(two, Sparseness::Severe);
    }

    #[test]
    fn derived_totals_match_explicit_totals() {
        let table = TableCounts::new(0, 3, 0, 4);
        let options = ClassifyOptions::default();
        let derived = classify(Measure::RiskDifference, &table, &options).unwrap();
        let explicit = classify_with_totals(
            Measure::RiskDifference,
            &table,
            GroupTotals { nt: 3, nc: 4 },
            &options,
        )
        .unwrap();
        assert_eq!(derived, explicit);
    }
}
