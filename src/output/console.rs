//! Human-readable renderings for the terminal.

use super::cell;
use crate::extract::{Record, Table};

/// Widest a column is allowed to grow before values are cut.
const MAX_CELL_WIDTH: usize = 40;

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// Aligned text table with a header and a trailing row count.
pub fn render_table(table: &Table) -> String {
    let columns = table.columns();
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| truncate(&cell(row, c).replace('\n', " "), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, columns.iter().map(String::as_str), &widths);
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rules.iter().map(String::as_str), &widths);
    for row in &cells {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out.push_str(&format!("[{} rows x {} columns]\n", table.len(), columns.len()));
    out
}

fn push_row<'a>(out: &mut String, values: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = values
        .zip(widths)
        .map(|(v, w)| format!("{v:<w$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// One `label : value` line per column, framed by separator lines.
pub fn render_record(record: &Record) -> String {
    let rule = "=".repeat(40);
    let width = record.columns().map(|c| c.chars().count()).max().unwrap_or(0);
    let mut out = format!("{rule}\n");
    for (column, value) in record.iter() {
        let value = value.map(|v| v.render()).unwrap_or_default();
        out.push_str(&format!("{column:<width$} : {value}\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
