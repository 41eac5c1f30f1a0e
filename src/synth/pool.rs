//! Per-tag pools of real sub-trees.

use indexmap::IndexMap;

use crate::tree::{Namespace, XmlNode};

/// Copies of the direct children of the source units, grouped by local tag
/// in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pools {
    entries: IndexMap<String, Vec<XmlNode>>,
    /// Prefix bindings declared on the source units, first declaration wins.
    prefixes: IndexMap<String, String>,
}

impl Pools {
    /// Pool the children of the first `limit` units, skipping every child
    /// tagged `id_tag`.
    pub fn build<'a>(
        units: impl IntoIterator<Item = &'a XmlNode>,
        ns: &Namespace,
        id_tag: &str,
        limit: usize,
    ) -> Self {
        let mut entries: IndexMap<String, Vec<XmlNode>> = IndexMap::new();
        let mut prefixes = IndexMap::new();
        for unit in units.into_iter().take(limit) {
            for (prefix, uri) in &unit.prefixes {
                prefixes
                    .entry(prefix.clone())
                    .or_insert_with(|| uri.clone());
            }
            for child in &unit.children {
                if ns.matches(&child.name, id_tag) {
                    continue;
                }
                entries
                    .entry(child.local_name().to_string())
                    .or_default()
                    .push(child.clone());
            }
        }
        Self { entries, prefixes }
    }

    /// Bindings a pooled sub-tree may rely on from its former parent unit.
    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    pub fn get(&self, tag: &str) -> Option<&[XmlNode]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[XmlNode])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct pooled tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
