//! Owned XML tree used by extraction and generation.
//!
//! The tree is fully materialised in memory. Nodes are plain values, so a
//! structural copy of a sub-tree is just `clone()`.
//!
//! ```text
//! Document
//! └── root: XmlNode
//!     ├── name: QName { namespace, local }
//!     ├── attributes: IndexMap<String, String>  (document order)
//!     ├── prefixes: IndexMap<String, String>    (xmlns:prefix → uri)
//!     ├── text: Option<String>
//!     └── children: Vec<XmlNode>
//! ```

use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

// ============================================================================
// NAMES
// ============================================================================

/// A namespace-qualified tag name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI, `None` for unqualified tags.
    pub namespace: Option<Arc<str>>,
    /// Local part of the tag.
    pub local: String,
}

impl QName {
    /// Create a qualified name.
    pub fn new(namespace: Option<Arc<str>>, local: impl Into<String>) -> Self {
        Self {
            namespace,
            local: local.into(),
        }
    }

    /// Create a name without a namespace.
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self::new(None, local)
    }

    /// Namespace URI, or the empty string when unqualified.
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }

    /// Clark notation (`{uri}local`), the form `strip_namespace` accepts.
    pub fn clark(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{{{ns}}}{}", self.local),
            _ => self.local.clone(),
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.clark())
    }
}

// ============================================================================
// NODES
// ============================================================================

/// A single element of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlNode {
    pub name: QName,
    /// Attributes in document order; prefixed attributes keep their prefix.
    pub attributes: IndexMap<String, String>,
    /// `xmlns:prefix` bindings declared on this element. The default
    /// namespace is not stored here; it follows from `name`.
    pub prefixes: IndexMap<String, String>,
    /// Concatenated character data directly inside this element.
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an empty element.
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: IndexMap::new(),
            prefixes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Declare a namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), uri.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Local part of this element's tag.
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Append character data, as produced by consecutive text events.
    pub(crate) fn push_text(&mut self, chunk: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }

    /// Count this node and every node beneath it.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(XmlNode::subtree_size).sum::<usize>()
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// A parsed XML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: XmlNode,
}

impl Document {
    /// Wrap an existing root element.
    pub fn new(root: XmlNode) -> Self {
        Self { root }
    }

    /// Parse a document from raw bytes.
    pub fn parse(input: &[u8]) -> Result<Self> {
        super::reader::XmlReader::new().read(input)
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let document = Self::parse(&bytes)?;
        tracing::debug!(
            "Loaded {} ({} top-level elements)",
            path.display(),
            document.root.children.len()
        );
        Ok(document)
    }

    /// Serialize the document (declaration + indented body).
    pub fn to_xml_bytes(&self) -> Result<Vec<u8>> {
        super::writer::XmlWriter::new().write(self)
    }

    /// Serialize and write the document to disk.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_xml_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }

    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Consume the document, returning its root element.
    pub fn into_root(self) -> XmlNode {
        self.root
    }
}
