//! XML writer for [`Document`].
//!
//! Every element is written with its local name. A default `xmlns`
//! declaration is emitted on the root and wherever a child's namespace
//! differs from its parent's, so a document read with prefixes is written
//! back with a single default namespace. Prefix bindings read from the
//! source (`xmlns:xsi`, ...) are declared again on the same element so
//! prefixed attributes stay bound.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::node::{Document, XmlNode};
use crate::error::{DrugbankError, Result};

/// Serializes a document to indented UTF-8 XML.
pub struct XmlWriter {
    indent: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// Use a different indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn write(&self, document: &Document) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', self.indent);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| DrugbankError::xml(format!("Write error: {e}")))?;

        Self::write_node(&mut writer, document.root(), None)?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }

    fn write_node<W: std::io::Write>(
        writer: &mut Writer<W>,
        node: &XmlNode,
        parent_ns: Option<&str>,
    ) -> Result<()> {
        let mut start = BytesStart::new(node.name.local.as_str());

        let own_ns = node.name.namespace_uri();
        if parent_ns != Some(own_ns) && !(parent_ns.is_none() && own_ns.is_empty()) {
            start.push_attribute(("xmlns", own_ns));
        }

        for (prefix, uri) in &node.prefixes {
            let key = format!("xmlns:{prefix}");
            start.push_attribute((key.as_str(), uri.as_str()));
        }

        for (key, value) in &node.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let text = node.text.as_deref().filter(|t| !t.is_empty());
        if text.is_none() && node.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| DrugbankError::xml(format!("Write error: {e}")))?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| DrugbankError::xml(format!("Write error: {e}")))?;

        if let Some(text) = text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| DrugbankError::xml(format!("Write error: {e}")))?;
        }

        for child in &node.children {
            Self::write_node(writer, child, Some(own_ns))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(node.name.local.as_str())))
            .map_err(|e| DrugbankError::xml(format!("Write error: {e}")))?;

        Ok(())
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
