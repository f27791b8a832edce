//! Measure values as a function of the continuity correction.
//!
//! Diagnostic companion to the classifiers: every cell is shifted by
//! epsilon and the chosen measure is evaluated at each point of a sweep.
//! Pure functions of their inputs; callers may restart or parallelize
//! sweeps freely.

use sct_model::{Measure, TableCounts};

/// Lower end of the default sweep grid.
pub const SWEEP_MIN: f64 = 1e-8;

/// Upper end of the default sweep grid.
pub const SWEEP_MAX: f64 = 1.0;

/// Number of points in the default sweep grid.
pub const SWEEP_POINTS: usize = 200;

/// Value of `measure` with `epsilon` added to every cell.
///
/// Finite for every `epsilon > 0` and non-negative cells: each shifted
/// denominator is at least `epsilon`.
pub fn measure_value(table: &TableCounts, measure: Measure, epsilon: f64) -> f64 {
    let a = table.a as f64 + epsilon;
    let b = table.b as f64 + epsilon;
    let c = table.c as f64 + epsilon;
    let d = table.d as f64 + epsilon;

    match measure {
        Measure::OddsRatio => (a * d) / (b * c),
        Measure::RelativeRisk => (a / (a + b)) / (c / (c + d)),
        Measure::RiskDifference => a / (a + b) - c / (c + d),
    }
}

/// Evaluate `measure` across an ordered sweep of epsilon values.
///
/// The output has the same length and order as `epsilons`.
pub fn sensitivity_sweep(table: &TableCounts, measure: Measure, epsilons: &[f64]) -> Vec<f64> {
    epsilons
        .iter()
        .map(|&epsilon| measure_value(table, measure, epsilon))
        .collect()
}

/// `count` log-spaced values from `min` to `max` inclusive.
///
/// Both bounds must be strictly positive. One point yields `min` alone.
pub fn log_spaced_epsilons(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let log_min = min.ln();
            let step = (max.ln() - log_min) / (count - 1) as f64;
            (0..count)
                .map(|i| (log_min + step * i as f64).exp())
                .collect()
        }
    }
}
