//! Delimited text output.

use super::{TableFormat, cell};
use crate::error::Result;
use crate::extract::Table;

/// Comma-separated values with RFC 4180 quoting.
///
/// A header row of column names, then one line per record. Absent values
/// are empty fields; list values are joined with `", "` and quoted.
#[derive(Clone, Copy, Debug)]
pub struct Csv {
    delimiter: char,
}

impl Default for Csv {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl Csv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    fn escape(&self, field: &str) -> String {
        let needs_quotes = field.contains(self.delimiter)
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r');
        if needs_quotes {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn line<'a>(&self, fields: impl Iterator<Item = &'a str>, out: &mut String) {
        let mut first = true;
        for field in fields {
            if !first {
                out.push(self.delimiter);
            }
            first = false;
            out.push_str(&self.escape(field));
        }
        out.push('\n');
    }
}

impl TableFormat for Csv {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn write(&self, table: &Table) -> Result<Vec<u8>> {
        let mut out = String::new();
        self.line(table.columns().iter().map(String::as_str), &mut out);
        for row in table.rows() {
            let cells: Vec<String> = table.columns().iter().map(|c| cell(row, c)).collect();
            self.line(cells.iter().map(String::as_str), &mut out);
        }
        Ok(out.into_bytes())
    }
}
