//! CLI argument definitions for the sparse table classifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sct_model::{Levels, Measure, TableCounts};

#[derive(Parser)]
#[command(
    name = "sct",
    version,
    about = "Sparse Contingency Table Classifier - Grade 2x2 tables with zero cells",
    long_about = "Classify 2x2 contingency tables with one or more zero cells into\n\
                  MILD, MODERATE, or SEVERE sparseness, following Subbiah & Srinivasan\n\
                  (2008), Statistics & Probability Letters 78(18).\n\n\
                  Supports Odds Ratio, Relative Risk, and Risk Difference rules,\n\
                  single tables or CSV batches, and sensitivity sweeps over the\n\
                  continuity correction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single 2x2 table.
    Classify(ClassifyArgs),

    /// Classify every table in a CSV file with columns a,b,c,d.
    Batch(BatchArgs),

    /// Evaluate a measure across a sweep of continuity corrections.
    Sensitivity(SensitivityArgs),

    /// List the supported summary measures.
    Measures,
}

/// The four cell counts, shared by the single-table commands.
#[derive(Parser)]
pub struct TableArgs {
    /// Top-left cell (treated, event).
    #[arg(value_name = "A")]
    pub a: u64,

    /// Top-right cell (treated, no event).
    #[arg(value_name = "B")]
    pub b: u64,

    /// Bottom-left cell (control, event).
    #[arg(value_name = "C")]
    pub c: u64,

    /// Bottom-right cell (control, no event).
    #[arg(value_name = "D")]
    pub d: u64,
}

impl TableArgs {
    pub fn to_counts(&self) -> TableCounts {
        TableCounts::new(self.a, self.b, self.c, self.d)
    }
}

#[derive(Parser)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Summary measure driving the decision rules.
    #[arg(long = "measure", value_enum, default_value = "or")]
    pub measure: MeasureArg,

    /// Number of output categories (2 folds MODERATE into SEVERE).
    #[arg(long = "levels", value_enum, default_value = "3")]
    pub levels: LevelsArg,

    /// Continuity correction (at least 1e-8).
    #[arg(long = "epsilon", default_value_t = sct_model::DEFAULT_EPSILON)]
    pub epsilon: f64,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with one table per row in columns a,b,c,d.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Classified CSV destination (default: classification_results.csv
    /// next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a JSON summary of the run.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Summary measure driving the decision rules.
    #[arg(long = "measure", value_enum, default_value = "or")]
    pub measure: MeasureArg,

    /// Number of output categories (2 folds MODERATE into SEVERE).
    #[arg(long = "levels", value_enum, default_value = "3")]
    pub levels: LevelsArg,

    /// Continuity correction (at least 1e-8).
    #[arg(long = "epsilon", default_value_t = sct_model::DEFAULT_EPSILON)]
    pub epsilon: f64,
}

#[derive(Parser)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Summary measure to evaluate.
    #[arg(long = "measure", value_enum, default_value = "or")]
    pub measure: MeasureArg,

    /// Lower end of the epsilon sweep.
    #[arg(long = "min-epsilon", default_value_t = sct_core::SWEEP_MIN)]
    pub min_epsilon: f64,

    /// Upper end of the epsilon sweep.
    #[arg(long = "max-epsilon", default_value_t = sct_core::SWEEP_MAX)]
    pub max_epsilon: f64,

    /// Number of log-spaced sweep points.
    #[arg(long = "points", default_value_t = sct_core::SWEEP_POINTS)]
    pub points: usize,

    /// Write the sweep as CSV to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI summary measure choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MeasureArg {
    Or,
    Rr,
    Rd,
}

impl MeasureArg {
    pub fn to_measure(self) -> Measure {
        match self {
            MeasureArg::Or => Measure::OddsRatio,
            MeasureArg::Rr => Measure::RelativeRisk,
            MeasureArg::Rd => Measure::RiskDifference,
        }
    }
}

/// CLI classification level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LevelsArg {
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
}

impl LevelsArg {
    pub fn to_levels(self) -> Levels {
        match self {
            LevelsArg::Two => Levels::Two,
            LevelsArg::Three => Levels::Three,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
