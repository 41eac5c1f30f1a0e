//! Declarative field paths.
//!
//! A path is a `/`-separated list of child steps relative to a context
//! node. Each step may carry one attribute predicate, written
//! `tag[@attr='value']`. The path ends in one of:
//!
//! - text content of the first match ([`FieldPath::text`])
//! - an attribute of the first match ([`FieldPath::attribute`])
//! - the texts of every match ([`FieldPath::list`])
//!
//! ```text
//! drugbank-id[@primary='true']          → text
//! polypeptide  + @source                → attribute
//! synonyms/synonym                      → list
//! ```

use super::record::FieldValue;
use crate::tree::{Namespace, XmlNode, attribute_or_absent, text_or_absent};

/// An attribute equality test attached to a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeFilter {
    pub attribute: String,
    pub value: String,
}

/// One child step of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: String,
    pub filter: Option<AttributeFilter>,
}

impl Step {
    /// Parse `tag` or `tag[@attr='value']`.
    ///
    /// A malformed predicate is kept as part of the tag, which then simply
    /// never matches.
    pub fn parse(raw: &str) -> Self {
        if let Some((tag, rest)) = raw.split_once('[') {
            if let Some(filter) = parse_predicate(rest) {
                return Self {
                    tag: tag.to_string(),
                    filter: Some(filter),
                };
            }
            tracing::warn!("Ignoring malformed path predicate in '{raw}'");
        }
        Self {
            tag: raw.to_string(),
            filter: None,
        }
    }

    fn accepts(&self, node: &XmlNode, ns: &Namespace) -> bool {
        ns.matches(&node.name, &self.tag)
            && self
                .filter
                .as_ref()
                .is_none_or(|f| node.attribute(&f.attribute) == Some(f.value.as_str()))
    }
}

fn parse_predicate(rest: &str) -> Option<AttributeFilter> {
    let inner = rest.strip_suffix(']')?.strip_prefix('@')?;
    let (attribute, quoted) = inner.split_once('=')?;
    let value = quoted
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| quoted.strip_prefix('"').and_then(|v| v.strip_suffix('"')))?;
    Some(AttributeFilter {
        attribute: attribute.trim().to_string(),
        value: value.to_string(),
    })
}

/// What a path yields once its steps have been followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Terminal {
    Text,
    Attribute(String),
    TextList,
}

/// A path from a context node to one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    steps: Vec<Step>,
    terminal: Terminal,
}

impl FieldPath {
    fn new(path: &str, terminal: Terminal) -> Self {
        Self {
            steps: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(Step::parse)
                .collect(),
            terminal,
        }
    }

    /// Trimmed text of the first node along `path`.
    pub fn text(path: &str) -> Self {
        Self::new(path, Terminal::Text)
    }

    /// Attribute of the first node along `path` (the context node itself
    /// when `path` is empty).
    pub fn attribute(path: &str, attribute: &str) -> Self {
        Self::new(path, Terminal::Attribute(attribute.to_string()))
    }

    /// Non-blank texts of every node along `path`, in document order.
    pub fn list(path: &str) -> Self {
        Self::new(path, Terminal::TextList)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Every node the steps reach, in document order.
    pub fn select_all<'a>(&self, context: &'a XmlNode, ns: &Namespace) -> Vec<&'a XmlNode> {
        let mut current = vec![context];
        for step in &self.steps {
            current = current
                .into_iter()
                .flat_map(move |n| n.children.iter().filter(move |c| step.accepts(c, ns)))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// The first node the steps reach.
    pub fn select<'a>(&self, context: &'a XmlNode, ns: &Namespace) -> Option<&'a XmlNode> {
        first_match(context, ns, &self.steps)
    }

    /// Evaluate the path; absence anywhere yields `None`.
    pub fn evaluate(&self, context: &XmlNode, ns: &Namespace) -> Option<FieldValue> {
        match &self.terminal {
            Terminal::Text => text_or_absent(self.select(context, ns)).map(FieldValue::Text),
            Terminal::Attribute(name) => {
                attribute_or_absent(self.select(context, ns), name).map(FieldValue::Text)
            }
            Terminal::TextList => Some(FieldValue::List(
                self.select_all(context, ns)
                    .into_iter()
                    .filter_map(|n| text_or_absent(Some(n)))
                    .collect(),
            )),
        }
    }

    /// Evaluate as plain text.
    pub fn evaluate_text(&self, context: &XmlNode, ns: &Namespace) -> Option<String> {
        match self.evaluate(context, ns)? {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn first_match<'a>(node: &'a XmlNode, ns: &Namespace, steps: &[Step]) -> Option<&'a XmlNode> {
    let Some((head, rest)) = steps.split_first() else {
        return Some(node);
    };
    node.children
        .iter()
        .filter(|c| head.accepts(c, ns))
        .find_map(|c| first_match(c, ns, rest))
}
