//! Namespace-aware XML reader producing an owned [`Document`].

use std::sync::Arc;

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{PrefixDeclaration, ResolveResult};
use rustc_hash::FxHashMap;

use super::node::{Document, QName, XmlNode};
use crate::error::{DrugbankError, Result};

/// Builds a [`Document`] from a byte slice.
pub struct XmlReader {
    /// Open elements, innermost last.
    stack: Vec<XmlNode>,
    /// The completed root element.
    root: Option<XmlNode>,
    /// Interned namespace URIs so every node shares one allocation per URI.
    namespaces: FxHashMap<Vec<u8>, Arc<str>>,
}

impl XmlReader {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            namespaces: FxHashMap::default(),
        }
    }

    pub fn read(mut self, input: &[u8]) -> Result<Document> {
        let mut reader = NsReader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_resolved_event_into(&mut buf) {
                Ok((ns, Event::Start(ref e))) => {
                    let node = self.open_element(ns, e)?;
                    self.stack.push(node);
                }
                Ok((ns, Event::Empty(ref e))) => {
                    // Self-closing element - open and close in one go
                    let node = self.open_element(ns, e)?;
                    self.close_element(node)?;
                }
                Ok((_, Event::End(_))) => {
                    let node = self
                        .stack
                        .pop()
                        .ok_or_else(|| DrugbankError::xml("Unbalanced closing tag"))?;
                    self.close_element(node)?;
                }
                Ok((_, Event::Text(ref t))) => {
                    let text = t
                        .unescape()
                        .map_err(|e| DrugbankError::xml(format!("Text error: {e}")))?;
                    if let Some(top) = self.stack.last_mut() {
                        top.push_text(&text);
                    }
                }
                Ok((_, Event::CData(ref c))) => {
                    let text = std::str::from_utf8(c)
                        .map_err(|e| DrugbankError::xml(format!("Invalid CDATA: {e}")))?;
                    if let Some(top) = self.stack.last_mut() {
                        top.push_text(text);
                    }
                }
                Ok((_, Event::Eof)) => break,
                Err(e) => {
                    return Err(DrugbankError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !self.stack.is_empty() {
            return Err(DrugbankError::xml(format!(
                "Unexpected end of input: {} element(s) left open",
                self.stack.len()
            )));
        }

        self.root
            .map(Document::new)
            .ok_or_else(|| DrugbankError::xml("Document has no root element"))
    }

    fn open_element(&mut self, ns: ResolveResult<'_>, e: &BytesStart<'_>) -> Result<XmlNode> {
        let local = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|e| DrugbankError::xml(format!("Invalid tag name: {e}")))?
            .to_string();

        let namespace = match ns {
            ResolveResult::Bound(uri) => Some(self.intern(uri.as_ref())?),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(DrugbankError::xml(format!(
                    "Unknown namespace prefix '{}' on <{local}>",
                    String::from_utf8_lossy(&prefix)
                )));
            }
        };

        let mut node = XmlNode::new(QName::new(namespace, local));

        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| DrugbankError::xml(format!("Attribute error: {e}")))?;
            match attr.key.as_namespace_binding() {
                // The default namespace is re-derived from node names on write
                Some(PrefixDeclaration::Default) => continue,
                Some(PrefixDeclaration::Named(prefix)) => {
                    let prefix = std::str::from_utf8(prefix)
                        .map_err(|e| DrugbankError::xml(format!("Invalid prefix: {e}")))?
                        .to_string();
                    let uri = attr
                        .unescape_value()
                        .map_err(|e| DrugbankError::xml(format!("Namespace URI error: {e}")))?
                        .to_string();
                    node.prefixes.insert(prefix, uri);
                    continue;
                }
                None => {}
            }
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| DrugbankError::xml(format!("Attribute key error: {e}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| DrugbankError::xml(format!("Attribute value error: {e}")))?
                .to_string();
            node.attributes.insert(key, value);
        }

        Ok(node)
    }

    fn close_element(&mut self, node: XmlNode) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None if self.root.is_none() => self.root = Some(node),
            None => return Err(DrugbankError::xml("Multiple root elements")),
        }
        Ok(())
    }

    fn intern(&mut self, uri: &[u8]) -> Result<Arc<str>> {
        if let Some(existing) = self.namespaces.get(uri) {
            return Ok(existing.clone());
        }
        let text = std::str::from_utf8(uri)
            .map_err(|e| DrugbankError::xml(format!("Invalid namespace URI: {e}")))?;
        let interned: Arc<str> = Arc::from(text);
        self.namespaces.insert(uri.to_vec(), interned.clone());
        Ok(interned)
    }
}

impl Default for XmlReader {
    fn default() -> Self {
        Self::new()
    }
}
