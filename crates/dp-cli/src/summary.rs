use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dp_ingest::human_readable_size;
use dp_model::{ClassifiedType, VariableSummary};
use dp_report::format::{format_count, format_optional_count, format_ratio};

use dp_cli::pipeline::BatchEntry;

pub fn print_variable_summary(summary: &[VariableSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Type"),
        header_cell("Data type"),
        header_cell("Count"),
        header_cell("Missing"),
        header_cell("% Missing"),
        header_cell("Unique"),
        header_cell("% Unique"),
    ]);
    apply_table_style(&mut table);
    for index in 3..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in summary {
        table.add_row(vec![
            Cell::new(&row.name),
            type_cell(row.classified_type),
            Cell::new(row.storage.display_kind()),
            Cell::new(format_count(row.base.count)),
            Cell::new(format_count(row.base.n_missing)),
            Cell::new(format_ratio(row.base.p_missing)),
            Cell::new(format_optional_count(row.base.n_unique)),
            Cell::new(format_ratio(row.base.p_unique)),
        ]);
    }
    println!("{table}");
}

pub fn print_batch_summary(entries: &[BatchEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Size"),
        header_cell("Status"),
        header_cell("Report / Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    for entry in entries {
        let size = entry
            .size
            .map_or_else(|| dim_cell("-"), |bytes| Cell::new(human_readable_size(bytes)));
        let (status, detail) = match &entry.outcome {
            Ok(path) => (
                Cell::new("OK").fg(Color::Green),
                Cell::new(path.display()),
            ),
            Err(message) => (
                Cell::new("FAILED")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(message).fg(Color::Red),
            ),
        };
        table.add_row(vec![Cell::new(entry.input.display()), size, status, detail]);
    }

    let failed = entries.iter().filter(|entry| !entry.is_success()).count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{}/{}", entries.len() - failed, entries.len()))
            .add_attribute(Attribute::Bold),
        if failed > 0 {
            Cell::new(format!("{failed} failed")).fg(Color::Red)
        } else {
            dim_cell("-")
        },
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn type_cell(classified_type: ClassifiedType) -> Cell {
    let cell = Cell::new(classified_type);
    if classified_type.is_degenerate() {
        return cell.add_attribute(Attribute::Dim);
    }
    match classified_type {
        ClassifiedType::Binary => cell.fg(Color::Magenta),
        ClassifiedType::Interval => cell.fg(Color::Blue),
        ClassifiedType::Datetime => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Green),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
