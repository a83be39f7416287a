use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    // Standard output carries the document itself.
    if summary.output.is_stdout() {
        print_warnings(summary);
        return;
    }
    println!(
        "Converted {} palette(s) from {} to {}",
        summary.palettes.len(),
        summary.source,
        summary.output
    );
    if !summary.palettes.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Palette"),
            header_cell("Colors"),
            header_cell("Skipped"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        let mut total_colors = 0usize;
        let mut total_skipped = 0usize;
        for palette in &summary.palettes {
            total_colors += palette.colors;
            total_skipped += palette.skipped;
            table.add_row(vec![
                Cell::new(&palette.name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(palette.colors),
                count_cell(palette.skipped, Color::Yellow),
            ]);
        }
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(total_colors).add_attribute(Attribute::Bold),
            count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        ]);
        println!("{table}");
    }
    print_warnings(summary);
}

fn print_warnings(summary: &RunSummary) {
    if summary.warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in &summary.warnings {
        eprintln!("- {warning}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
