//! Configuration options for classification.

use serde::{Deserialize, Serialize};

use crate::enums::Levels;

/// Default continuity correction.
pub const DEFAULT_EPSILON: f64 = 0.5;

/// Smallest continuity correction the interfaces accept.
pub const MIN_EPSILON: f64 = 1e-8;

/// Options shared by every classification call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Continuity correction constant. Must be strictly positive; the
    /// odds-ratio moderate/severe threshold uses its reciprocal.
    pub epsilon: f64,
    /// Output level space (2 collapses MODERATE into SEVERE).
    pub levels: Levels,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            levels: Levels::default(),
        }
    }
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the continuity correction.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the output level space.
    #[must_use]
    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }
}
