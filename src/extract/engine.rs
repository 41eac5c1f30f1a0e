//! The extraction engine: unit selection, column evaluation, row assembly.

use std::fmt;

use super::path::FieldPath;
use super::record::{FieldValue, Record, Table};
use crate::tree::{Document, Namespace, XmlNode, find_all_children, find_descendants};

/// How the repeating units of an extraction are found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitPath {
    /// A `/`-separated child path from the root; the first step selects the
    /// owning top-level unit (e.g. `drug/products/product`).
    Children(String),
    /// Every element with this tag at any depth below a top-level unit.
    Descendants { top: String, tag: String },
}

impl UnitPath {
    pub fn children(path: impl Into<String>) -> Self {
        Self::Children(path.into())
    }

    pub fn descendants(top: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::Descendants {
            top: top.into(),
            tag: tag.into(),
        }
    }

    /// Every unit paired with its owning top-level node, in document order.
    pub fn select<'a>(&self, document: &'a Document, ns: &Namespace) -> Vec<Scope<'a>> {
        let root = document.root();
        match self {
            UnitPath::Children(path) => {
                let (top, rest) = path.split_once('/').unwrap_or((path.as_str(), ""));
                find_all_children(root, ns, top)
                    .into_iter()
                    .flat_map(|owner| {
                        find_all_children(owner, ns, rest)
                            .into_iter()
                            .map(move |item| Scope { item, owner })
                    })
                    .collect()
            }
            UnitPath::Descendants { top, tag } => find_all_children(root, ns, top)
                .into_iter()
                .flat_map(|owner| {
                    find_descendants(owner, ns, tag)
                        .into_iter()
                        .map(move |item| Scope { item, owner })
                })
                .collect(),
        }
    }
}

impl fmt::Display for UnitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitPath::Children(path) => f.write_str(path),
            UnitPath::Descendants { top, tag } => write!(f, "{top}//{tag}"),
        }
    }
}

/// A matched unit and the top-level node it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct Scope<'a> {
    pub item: &'a XmlNode,
    pub owner: &'a XmlNode,
}

type DeriveFn = Box<dyn Fn(&Scope<'_>, &Namespace) -> Option<FieldValue> + Send + Sync>;
type FilterFn = Box<dyn Fn(&Scope<'_>, &Namespace) -> bool + Send + Sync>;

/// Where a column's value comes from.
pub enum ColumnSource {
    /// A path relative to the unit.
    Item(FieldPath),
    /// A path relative to the owning top-level unit.
    Owner(FieldPath),
    /// Computed from the scope.
    Derived(DeriveFn),
}

impl fmt::Debug for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSource::Item(path) => f.debug_tuple("Item").field(path).finish(),
            ColumnSource::Owner(path) => f.debug_tuple("Owner").field(path).finish(),
            ColumnSource::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// One output column.
#[derive(Debug)]
pub struct Column {
    pub name: String,
    pub source: ColumnSource,
}

/// A complete declarative extraction: units, columns, unit filters.
pub struct ExtractSpec {
    name: String,
    unit: UnitPath,
    columns: Vec<Column>,
    filters: Vec<FilterFn>,
}

impl ExtractSpec {
    pub fn new(name: impl Into<String>, unit: UnitPath) -> Self {
        Self {
            name: name.into(),
            unit,
            columns: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Column read from the unit.
    pub fn field(mut self, name: impl Into<String>, path: FieldPath) -> Self {
        self.columns.push(Column {
            name: name.into(),
            source: ColumnSource::Item(path),
        });
        self
    }

    /// Column read from the owning top-level unit.
    pub fn owner_field(mut self, name: impl Into<String>, path: FieldPath) -> Self {
        self.columns.push(Column {
            name: name.into(),
            source: ColumnSource::Owner(path),
        });
        self
    }

    /// Column computed from the scope.
    pub fn derived<F>(mut self, name: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&Scope<'_>, &Namespace) -> Option<FieldValue> + Send + Sync + 'static,
    {
        self.columns.push(Column {
            name: name.into(),
            source: ColumnSource::Derived(Box::new(derive)),
        });
        self
    }

    /// Skip units for which `path` selects nothing.
    pub fn require(self, path: FieldPath) -> Self {
        self.filter(move |scope, ns| path.select(scope.item, ns).is_some())
    }

    /// Skip units for which `keep` returns false.
    pub fn filter<F>(mut self, keep: F) -> Self
    where
        F: Fn(&Scope<'_>, &Namespace) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(keep));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &UnitPath {
        &self.unit
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    fn evaluate(&self, scope: &Scope<'_>, ns: &Namespace) -> Record {
        let mut record = Record::new();
        for column in &self.columns {
            let value = match &column.source {
                ColumnSource::Item(path) => path.evaluate(scope.item, ns),
                ColumnSource::Owner(path) => path.evaluate(scope.owner, ns),
                ColumnSource::Derived(derive) => derive(scope, ns),
            };
            record.insert(column.name.clone(), value);
        }
        record
    }
}

impl fmt::Debug for ExtractSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractSpec")
            .field("name", &self.name)
            .field("unit", &self.unit)
            .field("columns", &self.columns)
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Runs [`ExtractSpec`]s against documents.
#[derive(Clone, Debug, Default)]
pub struct Extractor {
    ns: Namespace,
}

impl Extractor {
    pub fn new(ns: Namespace) -> Self {
        Self { ns }
    }

    /// Extractor using the namespace declared on `document`'s root.
    pub fn for_document(document: &Document) -> Self {
        Self::new(Namespace::of(document))
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// One record per selected unit, in document order.
    pub fn run(&self, document: &Document, spec: &ExtractSpec) -> Table {
        let mut table = Table::new(spec.column_names());
        let mut skipped = 0usize;

        for scope in spec.unit.select(document, &self.ns) {
            if !spec.filters.iter().all(|keep| keep(&scope, &self.ns)) {
                skipped += 1;
                continue;
            }
            table.push(spec.evaluate(&scope, &self.ns));
        }

        tracing::debug!(
            "Extracted {} '{}' rows from {} ({} skipped)",
            table.len(),
            spec.name,
            spec.unit,
            skipped
        );
        table
    }
}
