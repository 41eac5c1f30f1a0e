//! Small undirected network graphs, rendered as Graphviz DOT.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::fmt::Write as _;

/// Role of a node; decides its fill colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Drug,
    Synonym,
    Pathway,
    Gene,
    Product,
}

impl NodeKind {
    pub fn color(self) -> &'static str {
        match self {
            NodeKind::Drug | NodeKind::Synonym | NodeKind::Pathway => "lightblue",
            NodeKind::Gene => "tomato",
            NodeKind::Product => "lightgreen",
        }
    }
}

/// An undirected graph with labelled, typed nodes.
///
/// Nodes are keyed by label; adding a label twice keeps the first kind.
/// Edges are deduplicated regardless of direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkGraph {
    title: String,
    nodes: IndexMap<String, NodeKind>,
    edges: Vec<(String, String)>,
}

impl NetworkGraph {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_node(&mut self, label: impl Into<String>, kind: NodeKind) {
        self.nodes.entry(label.into()).or_insert(kind);
    }

    /// Add an edge; both endpoints must already be nodes. Self loops and
    /// duplicates are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        if a == b || !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return;
        }
        if self.has_edge(a, b) {
            return;
        }
        self.edges.push((a.to_string(), b.to_string()));
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn kind_of(&self, label: &str) -> Option<NodeKind> {
        self.nodes.get(label).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Labels of every node adjacent to `label`, in edge insertion order.
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.edges
            .iter()
            .filter_map(|(a, b)| {
                if a == label {
                    Some(b.as_str())
                } else if b == label {
                    Some(a.as_str())
                } else {
                    None
                }
            })
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Render as an undirected Graphviz graph.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "graph {{");
        let _ = writeln!(out, "  label={};", quote(&self.title));
        let _ = writeln!(out, "  node [style=filled];");
        for (label, kind) in &self.nodes {
            let _ = writeln!(out, "  {} [fillcolor={}];", quote(label), kind.color());
        }
        for (a, b) in &self.edges {
            let _ = writeln!(out, "  {} -- {};", quote(a), quote(b));
        }
        out.push_str("}\n");
        out
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
