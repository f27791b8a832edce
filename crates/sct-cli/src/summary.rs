//! Terminal summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sct_model::{Levels, Sparseness};

use crate::types::BatchResult;

pub fn print_batch_summary(result: &BatchResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }
    println!(
        "Measure: {} ({} levels, epsilon {})",
        result.measure, result.options.levels, result.options.epsilon
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        category_cell(Sparseness::Mild),
        Cell::new(result.counts.mild),
    ]);
    if result.options.levels == Levels::Three {
        table.add_row(vec![
            category_cell(Sparseness::Moderate),
            Cell::new(result.counts.moderate),
        ]);
    }
    table.add_row(vec![
        category_cell(Sparseness::Severe),
        Cell::new(result.counts.severe),
    ]);
    if result.counts.not_sparse > 0 {
        table.add_row(vec![
            Cell::new("NOT SPARSE").fg(Color::Red),
            Cell::new(result.counts.not_sparse),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(result.counts.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn category_cell(category: Sparseness) -> Cell {
    let color = match category {
        Sparseness::Mild => Color::Green,
        Sparseness::Moderate => Color::Yellow,
        Sparseness::Severe => Color::Red,
    };
    Cell::new(category.as_str()).fg(color)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
