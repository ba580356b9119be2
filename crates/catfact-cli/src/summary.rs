use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catfact_cli::report::LevelReport;

use crate::cli::OutputFormatArg;

pub fn print_report(report: &LevelReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => {
            println!("Column: {} ({})", report.column, report.operation);
            println!("{}", level_table(report));
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn level_table(report: &LevelReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100)
        .set_header(
            ["Level", "Count", "Share"]
                .into_iter()
                .map(|label| label_cell(label, Color::Cyan)),
        );
    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in &report.levels {
        let count = if row.count == 0 {
            muted(row.count)
        } else {
            Cell::new(row.count)
        };
        table.add_row(vec![
            Cell::new(&row.level),
            count,
            Cell::new(format!("{:.1}%", row.share * 100.0)),
        ]);
    }
    if report.nulls > 0 {
        table.add_row(vec![muted("(null)"), muted(report.nulls), muted("-")]);
    }
    table.add_row(vec![
        label_cell("TOTAL", Color::Cyan),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
        muted("-"),
    ]);
    table
}

fn label_cell(label: &str, color: Color) -> Cell {
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn muted(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catfact_transform::infreq;

    #[test]
    fn table_lists_levels_nulls_and_total() {
        let fct = infreq(&vec![Some("b"), None, Some("a"), Some("b")], None).unwrap();
        let report = LevelReport::from_factor("fruit", "levels", &fct);
        let rendered = level_table(&report).to_string();
        assert!(rendered.contains("66.7%"));
        assert!(rendered.contains("(null)"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("33.3%"));
    }
}
