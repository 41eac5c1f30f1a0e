//! Table output formats.
//!
//! Every format implements [`TableFormat`]; [`format_for_path`] picks one
//! from a file extension.
//!
//! | Format   | Extension | Absent value | List value        |
//! |----------|-----------|--------------|-------------------|
//! | [`Csv`]  | `.csv`    | empty field  | `"a, b"`          |
//! | [`Json`] | `.json`   | `null`       | `["a", "b"]`      |

mod console;
mod csv;

pub use console::{render_record, render_table};
pub use csv::Csv;

use std::path::Path;

use crate::error::{DrugbankError, Result};
use crate::extract::{Record, Table};

/// A serialization of [`Table`]s.
pub trait TableFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// Serialize a table to bytes.
    fn write(&self, table: &Table) -> Result<Vec<u8>>;
}

/// JSON array of row objects, columns in declaration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Json {
    pub pretty: bool,
}

impl TableFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn write(&self, table: &Table) -> Result<Vec<u8>> {
        let rows = table.rows();
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(rows)
        } else {
            serde_json::to_vec(rows)
        };
        bytes.map_err(|e| DrugbankError::json(e.to_string()))
    }
}

/// Format matching the extension of `path`; unknown extensions fall back
/// to CSV.
pub fn format_for_path(path: &Path) -> Box<dyn TableFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Box::new(Json { pretty: true }),
        _ => Box::new(Csv::new()),
    }
}

/// Serialize `table` in the format implied by `path` and write it there.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let format = format_for_path(path);
    let bytes = format.write(table)?;
    std::fs::write(path, bytes)?;
    tracing::info!(
        "Wrote {} rows as {} to {}",
        table.len(),
        format.name(),
        path.display()
    );
    Ok(())
}

/// Text of one cell; absent is empty.
pub(crate) fn cell(row: &Record, column: &str) -> String {
    row.get(column).map(|v| v.render()).unwrap_or_default()
}
