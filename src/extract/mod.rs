//! Declarative XML-to-tabular extraction.
//!
//! An [`ExtractSpec`] names the repeating units of a document (a
//! [`UnitPath`]) and the columns to read from each one. The [`Extractor`]
//! walks the units in document order and emits one [`Record`] per unit into
//! a [`Table`]. Missing nodes and attributes never fail; they become absent
//! values.
//!
//! ```text
//! Document ──UnitPath──▶ [Scope { item, owner }] ──columns──▶ Table<Record>
//! ```

mod derived;
mod engine;
mod path;
mod record;

pub use derived::{
    Agency, GENATLAS, UNIPROTKB, collapse_newlines, cross_reference, drug_cross_reference,
    primary_id,
};
pub use engine::{Column, ColumnSource, ExtractSpec, Extractor, Scope, UnitPath};
pub use path::{AttributeFilter, FieldPath, Step, Terminal};
pub use record::{FieldValue, Record, Table};
