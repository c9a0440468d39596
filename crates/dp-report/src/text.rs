//! Plain-text and Markdown rendering with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::format::center;
use crate::layout::{BANNER_WIDTH, Block, Grid, HEADING_WIDTH};

/// Table flavour of a line-oriented report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Rounded box drawing, optionally coloured.
    Boxed { styled: bool },
    /// Pipe tables.
    Markdown,
}

impl TableStyle {
    fn line_break(self) -> &'static str {
        match self {
            TableStyle::Boxed { .. } => "\n",
            TableStyle::Markdown => "\n\n",
        }
    }
}

fn header_cell(label: &str, styled: bool) -> Cell {
    let cell = Cell::new(label);
    if styled {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table, style: TableStyle) {
    match style {
        TableStyle::Boxed { styled } => {
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            if styled {
                table.enforce_styling();
            } else {
                table.force_no_tty();
            }
        }
        TableStyle::Markdown => {
            table.load_preset(ASCII_MARKDOWN).force_no_tty();
        }
    }
}

/// Draws one grid; value columns are right-aligned.
pub fn render_grid(grid: &Grid, style: TableStyle) -> String {
    let styled = matches!(style, TableStyle::Boxed { styled: true });
    let mut table = Table::new();
    apply_table_style(&mut table, style);
    table.set_header(
        grid.header
            .iter()
            .map(|label| header_cell(label, styled))
            .collect::<Vec<_>>(),
    );
    for row in &grid.rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    for index in 1..grid.header.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.to_string()
}

fn render_block(block: &Block, style: TableStyle) -> String {
    match block {
        Block::Banner(text) => center(text, BANNER_WIDTH, '='),
        Block::Heading(text) => center(text, HEADING_WIDTH, '='),
        Block::Paragraph(text) => text.clone(),
        Block::Table(grid) => render_grid(grid, style),
        Block::Break => String::new(),
    }
}

/// Renders laid-out blocks, one per line group, with a trailing newline.
pub fn render_blocks(blocks: &[Block], style: TableStyle) -> String {
    let mut out = blocks
        .iter()
        .map(|block| render_block(block, style))
        .collect::<Vec<_>>()
        .join(style.line_break());
    out.push('\n');
    out
}
