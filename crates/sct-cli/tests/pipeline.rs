//! Integration tests for the batch pipeline.

use std::path::Path;

use sct_cli::pipeline::{
    BatchCounts, classify_rows, default_output_path, write_batch_report,
};
use sct_model::{ClassifyOptions, Levels, Measure, TableCounts};

fn mixed_batch() -> Vec<TableCounts> {
    vec![
        TableCounts::new(5, 1, 0, 10), // OR: MILD
        TableCounts::new(0, 1, 2, 5),  // OR: MODERATE
        TableCounts::new(0, 0, 0, 0),  // OR: SEVERE
        TableCounts::new(1, 2, 3, 4),  // not sparse
    ]
}

#[test]
fn classify_rows_counts_every_category() {
    let (records, counts) = classify_rows(
        &mixed_batch(),
        Measure::OddsRatio,
        &ClassifyOptions::default(),
    );

    assert_eq!(records.len(), 4);
    assert_eq!(
        counts,
        BatchCounts {
            mild: 1,
            moderate: 1,
            severe: 1,
            not_sparse: 1,
        }
    );
    assert_eq!(counts.total(), 4);
}

#[test]
fn classify_rows_labels_rows_in_place() {
    let (records, _) = classify_rows(
        &mixed_batch(),
        Measure::OddsRatio,
        &ClassifyOptions::default(),
    );

    assert_eq!(records[0].class, "MILD");
    assert_eq!(records[1].class, "MODERATE");
    assert_eq!(records[2].class, "SEVERE");
    // The invalid row carries the validation message instead of a label.
    assert!(records[3].class.starts_with("ERROR:"));
    assert!(records[3].class.contains("at least one zero cell"));
}

#[test]
fn classify_rows_respects_two_level_mode() {
    let options = ClassifyOptions::default().with_levels(Levels::Two);
    let (records, counts) = classify_rows(&mixed_batch(), Measure::OddsRatio, &options);

    assert_eq!(counts.moderate, 0);
    assert_eq!(counts.severe, 2);
    assert!(records.iter().all(|record| record.class != "MODERATE"));
}

#[test]
fn default_output_lands_next_to_the_input() {
    let output = default_output_path(Path::new("data/tables.csv"));
    assert_eq!(output, Path::new("data/classification_results.csv"));
}

#[test]
fn batch_report_captures_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");
    let counts = BatchCounts {
        mild: 2,
        moderate: 1,
        severe: 0,
        not_sparse: 1,
    };

    write_batch_report(
        &path,
        Measure::RiskDifference,
        &ClassifyOptions::default(),
        &counts,
    )
    .expect("write report");

    let contents = std::fs::read_to_string(&path).expect("read report");
    let payload: serde_json::Value = serde_json::from_str(&contents).expect("parse report");
    assert_eq!(payload["schema"], "sct.batch-report");
    assert_eq!(payload["measure"], "RD");
    assert_eq!(payload["levels"], 3);
    assert_eq!(payload["rows"], 4);
    assert_eq!(payload["counts"]["mild"], 2);
    assert_eq!(payload["counts"]["not_sparse"], 1);
}
