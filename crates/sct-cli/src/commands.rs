//! Command implementations.

use std::io;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use sct_cli::pipeline::{classify_rows, default_output_path, write_batch_report};
use sct_core::{classify, log_spaced_epsilons, sensitivity_sweep};
use sct_ingest::{read_batch_csv, write_classified_csv};
use sct_model::{ClassifyOptions, MIN_EPSILON, Measure, Sparseness};

use crate::cli::{BatchArgs, ClassifyArgs, LevelsArg, SensitivityArgs};
use crate::summary::apply_table_style;
use crate::types::BatchResult;

pub fn run_classify(args: &ClassifyArgs) -> Result<Sparseness> {
    let options = classify_options(args.epsilon, args.levels)?;
    let table = args.table.to_counts();
    let verdict = classify(args.measure.to_measure(), &table, &options)?;
    Ok(verdict)
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchResult> {
    let options = classify_options(args.epsilon, args.levels)?;
    let measure = args.measure.to_measure();
    let span = info_span!("batch", input = %args.input.display());
    let _guard = span.enter();

    let tables = read_batch_csv(&args.input).context("read batch input")?;
    info!(rows = tables.len(), %measure, "classifying batch");
    let (records, counts) = classify_rows(&tables, measure, &options);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_classified_csv(&output, &records).context("write classified output")?;
    if let Some(report) = &args.report {
        write_batch_report(report, measure, &options, &counts).context("write batch report")?;
    }

    Ok(BatchResult {
        input: args.input.clone(),
        output,
        report: args.report.clone(),
        measure,
        options,
        counts,
    })
}

pub fn run_sensitivity(args: &SensitivityArgs) -> Result<()> {
    if !args.min_epsilon.is_finite() || args.min_epsilon < MIN_EPSILON {
        bail!("--min-epsilon must be at least {MIN_EPSILON:e}");
    }
    if !args.max_epsilon.is_finite() || args.max_epsilon < args.min_epsilon {
        bail!("--max-epsilon must be at least --min-epsilon");
    }
    if args.points == 0 {
        bail!("--points must be positive");
    }

    let table = args.table.to_counts();
    let measure = args.measure.to_measure();
    let grid = log_spaced_epsilons(args.min_epsilon, args.max_epsilon, args.points);
    let values = sensitivity_sweep(&table, measure, &grid);

    match &args.output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("create {}", path.display()))?;
            write_sweep(&mut writer, &grid, &values)?;
            info!(path = %path.display(), points = grid.len(), "wrote sensitivity sweep");
        }
        None => {
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            write_sweep(&mut writer, &grid, &values)?;
        }
    }
    Ok(())
}

pub fn run_measures() {
    let mut table = Table::new();
    table.set_header(vec!["Measure", "Name", "Formula"]);
    apply_table_style(&mut table);
    for measure in Measure::all() {
        table.add_row(vec![measure.as_str(), measure.full_name(), measure.formula()]);
    }
    println!("{table}");
}

fn write_sweep<W: io::Write>(
    writer: &mut csv::Writer<W>,
    grid: &[f64],
    values: &[f64],
) -> Result<()> {
    writer.write_record(["epsilon", "value"])?;
    for (epsilon, value) in grid.iter().zip(values) {
        writer.write_record([epsilon.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn classify_options(epsilon: f64, levels: LevelsArg) -> Result<ClassifyOptions> {
    if !epsilon.is_finite() || epsilon < MIN_EPSILON {
        bail!("--epsilon must be at least {MIN_EPSILON:e}");
    }
    Ok(ClassifyOptions::new()
        .with_epsilon(epsilon)
        .with_levels(levels.to_levels()))
}
