//! Tree access layer.
//!
//! Parsing, serialization and namespace-qualified lookups over an owned XML
//! tree. Both the extractor and the synthetic generator are built on these
//! primitives.
//!
//! ```text
//! bytes ──XmlReader──▶ Document ──XmlWriter──▶ bytes
//!                         │
//!                         ▼
//!          access: find_optional_child, find_all_children,
//!                  attribute_filtered_child, text_or_absent
//! ```

pub mod access;
mod node;
mod reader;
mod writer;

pub use access::{
    DRUGBANK_NAMESPACE, Namespace, attribute_filtered_child, attribute_or_absent,
    children_named, find_all_children, find_descendants, find_optional_child, resolve_namespace,
    strip_namespace, text_or_absent,
};
pub use node::{Document, QName, XmlNode};
pub use reader::XmlReader;
pub use writer::XmlWriter;
