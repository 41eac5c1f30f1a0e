//! # drugbank
//!
//! Tabular extraction and synthetic inflation of DrugBank XML exports.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! service   → HTTP endpoint (feature "server")
//!   ↓
//! tables    → Concrete extractions: drugs, products, pathways, targets, ...
//!   ↓
//! extract   → UnitPath + FieldPath → Table of Records
//! synth     → Pools, sampler, identifier continuation → new Document
//!   ↓
//! tree      → Owned XML tree, namespace-qualified lookups, read/write
//! ```
//!
//! `output`, `chart` and `remote` are sinks and sources at the edges.

// ============================================================================
// MODULES (dependency order: tree → extract/synth → tables → service)
// ============================================================================

/// Error type and result alias
pub mod error;

/// Tree access layer: parse, serialize, namespace-qualified lookups
pub mod tree;

/// Declarative XML-to-tabular extraction
pub mod extract;

/// Pool-based synthetic drug generation
pub mod synth;

/// The concrete DrugBank extractions
pub mod tables;

/// CSV, JSON and console renderings of tables
pub mod output;

/// Chart sinks and network graphs
pub mod chart;

/// UniProt lookups
pub mod remote;

/// YAML settings
pub mod config;

/// HTTP service
#[cfg(feature = "server")]
pub mod service;

pub use config::Settings;
pub use error::{DrugbankError, Result};
pub use extract::{ExtractSpec, Extractor, FieldPath, FieldValue, Record, Table, UnitPath};
pub use synth::{Generator, Sampler};
pub use tree::{Document, Namespace, XmlNode};
