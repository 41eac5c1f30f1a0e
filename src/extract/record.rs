//! Flat records and the tables that hold them.

use indexmap::IndexMap;
use serde::Serialize;

/// A single extracted value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Count(usize),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// Render for delimited output; lists are joined with `", "`.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(", "),
            Self::Flag(b) => b.to_string(),
            Self::Count(n) => n.to_string(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// One row: every declared column maps to a value or an explicit absence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Option<FieldValue>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, keeping its original position if already present.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<FieldValue>) {
        self.fields.insert(column.into(), value);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, column: impl Into<String>, value: Option<FieldValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Whether `column` is a declared key (present or absent).
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// The value of `column`, `None` if absent or undeclared.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column).and_then(Option::as_ref)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_text)
    }

    /// List value of `column`; empty when absent.
    pub fn list(&self, column: &str) -> &[String] {
        self.get(column).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    /// Flag value of `column`; `false` when absent.
    pub fn flag(&self, column: &str) -> bool {
        self.get(column).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of records sharing one column layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Columns the row lacks are filled with absent values
    /// so every declared column is always a key.
    pub fn push(&mut self, mut row: Record) {
        for column in &self.columns {
            if !row.has_column(column) {
                row.insert(column.clone(), None);
            }
        }
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose `column` text equals `value`.
    pub fn find(&self, column: &str, value: &str) -> Option<&Record> {
        self.rows.iter().find(|r| r.text(column) == Some(value))
    }

    /// Keep only rows matching `predicate`.
    pub fn filtered(&self, predicate: impl Fn(&Record) -> bool) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}
