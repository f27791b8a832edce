pub mod classify;
pub mod sensitivity;

pub use classify::{classify, classify_with_totals, ensure_sparse};
pub use sensitivity::{
    SWEEP_MAX, SWEEP_MIN, SWEEP_POINTS, log_spaced_epsilons, measure_value, sensitivity_sweep,
};
