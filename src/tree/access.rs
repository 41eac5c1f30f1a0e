//! Namespace-qualified lookup primitives.
//!
//! Every lookup that does not find its target returns `None` (or an empty
//! `Vec`); nothing here fails. Callers decide what absence means for them.
//!
//! The namespace is always passed explicitly as a [`Namespace`] value, so
//! the same functions work against documents with different (or no)
//! namespaces without any process-wide registration.

use std::sync::Arc;

use super::node::{Document, QName, XmlNode};

/// The DrugBank export namespace.
pub const DRUGBANK_NAMESPACE: &str = "http://www.drugbank.ca";

/// The namespace every step of a lookup is qualified with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    uri: Arc<str>,
}

impl Namespace {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self { uri: uri.into() }
    }

    /// Namespace matching unqualified tags only.
    pub fn none() -> Self {
        Self::new("")
    }

    /// The DrugBank namespace.
    pub fn drugbank() -> Self {
        Self::new(DRUGBANK_NAMESPACE)
    }

    /// The namespace declared on the document's root.
    pub fn of(document: &Document) -> Self {
        Self::new(resolve_namespace(document))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether `name` is `local` in this namespace.
    pub fn matches(&self, name: &QName, local: &str) -> bool {
        name.local == local && name.namespace_uri() == self.uri()
    }

    /// Build a qualified name in this namespace.
    pub fn qualify(&self, local: impl Into<String>) -> QName {
        let namespace = if self.uri.is_empty() {
            None
        } else {
            Some(self.uri.clone())
        };
        QName::new(namespace, local)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::drugbank()
    }
}

/// The namespace URI of the document's root, or `""` if it has none.
pub fn resolve_namespace(document: &Document) -> String {
    document.root().name.namespace_uri().to_string()
}

/// Strip a `{uri}` prefix from a Clark-notation tag.
pub fn strip_namespace(tag: &str) -> &str {
    match tag.rfind('}') {
        Some(idx) => &tag[idx + 1..],
        None => tag,
    }
}

/// Iterate the direct children of `node` tagged `local`.
pub fn children_named<'a>(
    node: &'a XmlNode,
    ns: &'a Namespace,
    local: &'a str,
) -> impl Iterator<Item = &'a XmlNode> + 'a {
    node.children
        .iter()
        .filter(move |child| ns.matches(&child.name, local))
}

/// All nodes reached by following a `/`-separated path of child tags.
///
/// Results are in document order: for every match of the first step, its
/// matches of the second step, and so on.
pub fn find_all_children<'a>(node: &'a XmlNode, ns: &Namespace, path: &str) -> Vec<&'a XmlNode> {
    let mut current = vec![node];
    for step in path.split('/').filter(|s| !s.is_empty()) {
        current = current
            .into_iter()
            .flat_map(move |n| n.children.iter().filter(move |c| ns.matches(&c.name, step)))
            .collect();
        if current.is_empty() {
            break;
        }
    }
    current
}

/// The first node along a `/`-separated path, or `None`.
pub fn find_optional_child<'a>(
    node: &'a XmlNode,
    ns: &Namespace,
    path: &str,
) -> Option<&'a XmlNode> {
    let steps: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    first_along(node, ns, &steps)
}

fn first_along<'a>(node: &'a XmlNode, ns: &Namespace, steps: &[&str]) -> Option<&'a XmlNode> {
    let Some((head, rest)) = steps.split_first() else {
        return Some(node);
    };
    node.children
        .iter()
        .filter(|c| ns.matches(&c.name, head))
        .find_map(|c| first_along(c, ns, rest))
}

/// First direct child tagged `tag` whose `attribute` equals `value`.
pub fn attribute_filtered_child<'a>(
    node: &'a XmlNode,
    ns: &Namespace,
    tag: &str,
    attribute: &str,
    value: &str,
) -> Option<&'a XmlNode> {
    node.children
        .iter()
        .find(|c| ns.matches(&c.name, tag) && c.attribute(attribute) == Some(value))
}

/// Every descendant (at any depth, pre-order) tagged `tag`.
pub fn find_descendants<'a>(node: &'a XmlNode, ns: &Namespace, tag: &str) -> Vec<&'a XmlNode> {
    let mut found = Vec::new();
    collect_descendants(node, ns, tag, &mut found);
    found
}

fn collect_descendants<'a>(
    node: &'a XmlNode,
    ns: &Namespace,
    tag: &str,
    found: &mut Vec<&'a XmlNode>,
) {
    for child in &node.children {
        if ns.matches(&child.name, tag) {
            found.push(child);
        }
        collect_descendants(child, ns, tag, found);
    }
}

/// Trimmed text of `node`; `None` if the node is absent or its text is blank.
pub fn text_or_absent(node: Option<&XmlNode>) -> Option<String> {
    node.and_then(|n| n.text.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Attribute of `node`; `None` if the node or the attribute is absent.
pub fn attribute_or_absent(node: Option<&XmlNode>, attribute: &str) -> Option<String> {
    node.and_then(|n| n.attribute(attribute)).map(str::to_string)
}
