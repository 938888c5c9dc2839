use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use super::{format_cell, Column, ScoreRow, ScoreTable, COLUMNS};
use crate::comparison::AVERAGE_RESULT_NAME;

/// Render a score table for the terminal. Deltas are green when they make
/// the document easier to read and red when they make it harder.
pub fn render(table: &ScoreTable) -> String {
    let mut grid = Table::new();
    grid.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("File")];
    header.extend(COLUMNS.iter().map(|column| Cell::new(column.header())));
    grid.set_header(header);

    for row in &table.rows {
        grid.add_row(render_row(row));
    }

    format!("{}\n{}", table.title.bold(), grid)
}

fn render_row(row: &ScoreRow) -> Vec<Cell> {
    let name = if row.name == AVERAGE_RESULT_NAME {
        Cell::new(&row.name).fg(Color::Cyan)
    } else {
        Cell::new(&row.name)
    };

    let mut cells = vec![name];
    cells.extend(COLUMNS.iter().map(|&column| score_cell(row, column)));
    cells
}

fn score_cell(row: &ScoreRow, column: Column) -> Cell {
    let value = column.value(&row.scores);
    let delta = row.diff.as_ref().map(|diff| column.value(diff));
    let cell = Cell::new(format_cell(value, delta)).set_alignment(CellAlignment::Right);

    match delta {
        Some(delta) if delta != 0.0 => {
            if column.is_improvement(delta) {
                cell.fg(Color::Green)
            } else {
                cell.fg(Color::Red)
            }
        }
        _ => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ReadabilityScores;

    #[test]
    fn test_render_contains_headers_and_values() {
        colored::control::set_override(false);
        let table = ScoreTable {
            title: "Readability",
            rows: vec![ScoreRow {
                name: "guide.md".into(),
                scores: ReadabilityScores::uniform(12.5),
                diff: Some(ReadabilityScores::uniform(1.0)),
            }],
        };

        let rendered = render(&table);
        assert!(rendered.starts_with("Readability\n"));
        for header in ["File", "Readability", "FRE", "GF", "ARI", "CLI", "DCRS"] {
            assert!(rendered.contains(header));
        }
        assert!(rendered.contains("guide.md"));
        assert!(rendered.contains("12.50 (+1.00)"));
    }
}
