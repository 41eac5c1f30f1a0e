//! Pathways and the drugs that take part in them.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::chart::{NetworkGraph, NodeKind};
use crate::error::{DrugbankError, Result};
use crate::extract::{ExtractSpec, FieldPath, Table, UnitPath};

/// One row per pathway; participating drugs are gathered into lists.
pub fn pathway_spec() -> ExtractSpec {
    ExtractSpec::new("pathways", UnitPath::children("drug/pathways/pathway"))
        .field("id", FieldPath::text("smpdb-id"))
        .field("pathway_name", FieldPath::text("name"))
        .field("category", FieldPath::text("category"))
        .field("drug_ids", FieldPath::list("drugs/drug/drugbank-id"))
        .field("drug_names", FieldPath::list("drugs/drug/name"))
}

/// Number of distinct pathway names each drug name appears in.
///
/// Drugs are listed in order of first appearance. Pathways without a name
/// count as one shared unnamed pathway.
pub fn pathway_drug_counts(pathways: &Table) -> IndexMap<String, usize> {
    let mut seen: IndexMap<String, FxHashSet<Option<String>>> = IndexMap::new();
    for row in pathways.rows() {
        let pathway = row.text("pathway_name").map(str::to_string);
        for drug in row.list("drug_names") {
            seen.entry(drug.clone())
                .or_default()
                .insert(pathway.clone());
        }
    }
    seen.into_iter()
        .map(|(drug, pathways)| (drug, pathways.len()))
        .collect()
}

/// Pathway count of one drug name; an unknown name is `NotFound`.
pub fn pathway_count_for(counts: &IndexMap<String, usize>, drug: &str) -> Result<usize> {
    counts
        .get(drug)
        .copied()
        .ok_or_else(|| DrugbankError::drug_not_found(drug))
}

/// Counts sorted by descending pathway count, ties in first-seen order.
pub fn sorted_counts(counts: &IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<_> = counts.iter().map(|(d, c)| (d.clone(), *c)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Bipartite graph of pathways and the drugs named in them.
pub fn bipartite_graph(pathways: &Table) -> NetworkGraph {
    let mut graph = NetworkGraph::new("Bipartite Graph of Pathways and Drugs");
    for row in pathways.rows() {
        let Some(pathway) = row.text("pathway_name") else {
            continue;
        };
        graph.add_node(pathway, NodeKind::Pathway);
        for drug in row.list("drug_names") {
            graph.add_node(drug.as_str(), NodeKind::Drug);
            graph.add_edge(pathway, drug);
        }
    }
    graph
}
