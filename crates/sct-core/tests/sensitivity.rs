//! Sweep behavior of the sensitivity evaluator.

use sct_core::{SWEEP_MAX, SWEEP_MIN, SWEEP_POINTS, log_spaced_epsilons, sensitivity_sweep};
use sct_model::{Measure, TableCounts};

#[test]
fn default_grid_matches_the_published_sweep() {
    let grid = log_spaced_epsilons(SWEEP_MIN, SWEEP_MAX, SWEEP_POINTS);
    assert_eq!(grid.len(), 200);
    assert!(grid.iter().all(|eps| *eps > 0.0));
}

#[test]
fn sweep_is_finite_for_tables_with_zero_cells() {
    let grid = log_spaced_epsilons(SWEEP_MIN, SWEEP_MAX, SWEEP_POINTS);
    let tables = [
        TableCounts::new(1, 0, 2, 5),
        TableCounts::new(0, 0, 0, 0),
        TableCounts::new(0, 7, 0, 7),
        TableCounts::new(100, 0, 0, 100),
    ];
    for table in &tables {
        for measure in Measure::all() {
            let values = sensitivity_sweep(table, measure, &grid);
            assert_eq!(values.len(), grid.len());
            assert!(
                values.iter().all(|value| value.is_finite()),
                "non-finite value for {measure} on {table:?}"
            );
        }
    }
}

#[test]
fn risk_difference_stays_within_unit_interval() {
    let grid = log_spaced_epsilons(SWEEP_MIN, SWEEP_MAX, 50);
    let table = TableCounts::new(9, 0, 0, 9);
    let values = sensitivity_sweep(&table, Measure::RiskDifference, &grid);
    assert!(values.iter().all(|value| (-1.0..=1.0).contains(value)));
}

#[test]
fn sweep_respects_caller_supplied_grid() {
    let table = TableCounts::new(0, 1, 2, 5);
    let epsilons = [0.5, 0.25, 1.0];
    let values = sensitivity_sweep(&table, Measure::OddsRatio, &epsilons);
    assert_eq!(values.len(), 3);
    // Order follows the input, not the magnitude of epsilon.
    let at_half = values[0];
    let again = sensitivity_sweep(&table, Measure::OddsRatio, &[0.5])[0];
    assert_eq!(at_half, again);
}
