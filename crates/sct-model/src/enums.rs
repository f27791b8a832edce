//! Type-safe enumerations for the classification vocabulary.
//!
//! These enums give compile-time type safety to concepts that appear as
//! strings at the interface boundary (CLI flags, CSV cells, JSON reports).
//!
//! # Methodology reference
//!
//! Subbiah, M. & Srinivasan, M.R. (2008). "Classification of 2x2 sparse
//! data sets with zero cells", Statistics & Probability Letters, 78(18).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Summary measure of association for a 2x2 table.
///
/// Each measure carries its own decision tree over the zero-cell pattern,
/// so the choice of measure selects both the classifier and the formula
/// used by the sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// Odds Ratio: (a*d) / (b*c).
    #[serde(rename = "OR")]
    OddsRatio,

    /// Relative Risk: (a/(a+b)) / (c/(c+d)).
    #[serde(rename = "RR")]
    RelativeRisk,

    /// Risk Difference: a/(a+b) - c/(c+d).
    #[serde(rename = "RD")]
    RiskDifference,
}

impl Measure {
    /// Returns the short code used in files and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::OddsRatio => "OR",
            Measure::RelativeRisk => "RR",
            Measure::RiskDifference => "RD",
        }
    }

    /// Returns the full measure name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Measure::OddsRatio => "Odds Ratio",
            Measure::RelativeRisk => "Relative Risk",
            Measure::RiskDifference => "Risk Difference",
        }
    }

    /// Returns the defining formula over the cells (a, b, c, d).
    pub fn formula(&self) -> &'static str {
        match self {
            Measure::OddsRatio => "(a*d) / (b*c)",
            Measure::RelativeRisk => "(a/(a+b)) / (c/(c+d))",
            Measure::RiskDifference => "a/(a+b) - c/(c+d)",
        }
    }

    /// All supported measures, in display order.
    pub fn all() -> [Measure; 3] {
        [
            Measure::OddsRatio,
            Measure::RelativeRisk,
            Measure::RiskDifference,
        ]
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Measure {
    type Err = String;

    /// Parse a measure code or full name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "OR" | "ODDS RATIO" => Ok(Measure::OddsRatio),
            "RR" | "RELATIVE RISK" => Ok(Measure::RelativeRisk),
            "RD" | "RISK DIFFERENCE" => Ok(Measure::RiskDifference),
            _ => Err(format!("Unknown summary measure: {s}")),
        }
    }
}

/// Number of output categories.
///
/// The raw verdict is always three-way; two-level mode folds MODERATE into
/// SEVERE on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Levels {
    /// Collapsed output: MILD or SEVERE.
    Two,

    /// Full output: MILD, MODERATE, or SEVERE.
    #[default]
    Three,
}

impl Levels {
    /// Returns the numeric level count.
    pub fn as_u8(&self) -> u8 {
        match self {
            Levels::Two => 2,
            Levels::Three => 3,
        }
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for Levels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(Levels::Two),
            "3" => Ok(Levels::Three),
            _ => Err(format!("Unknown level count: {s} (expected 2 or 3)")),
        }
    }
}

/// Sparseness category assigned to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sparseness {
    Mild,
    Moderate,
    Severe,
}

impl Sparseness {
    /// Returns the canonical upper-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sparseness::Mild => "MILD",
            Sparseness::Moderate => "MODERATE",
            Sparseness::Severe => "SEVERE",
        }
    }

    /// Fold the verdict into the requested level space.
    ///
    /// Two-level mode merges MODERATE into SEVERE; everything else passes
    /// through unchanged. Total and idempotent.
    pub fn collapse(self, levels: Levels) -> Sparseness {
        match (levels, self) {
            (Levels::Two, Sparseness::Moderate) => Sparseness::Severe,
            _ => self,
        }
    }
}

impl fmt::Display for Sparseness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sparseness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MILD" => Ok(Sparseness::Mild),
            "MODERATE" => Ok(Sparseness::Moderate),
            "SEVERE" => Ok(Sparseness::Severe),
            _ => Err(format!("Unknown sparseness category: {s}")),
        }
    }
}
