//! Drugs targeting a given gene, with their products.

use rustc_hash::FxHashSet;

use crate::chart::{NetworkGraph, NodeKind};
use crate::error::{DrugbankError, Result};
use crate::extract::{ExtractSpec, Extractor, FieldPath, FieldValue, Table, UnitPath};
use crate::tree::{Document, Namespace, XmlNode, find_all_children};

/// Whether any target polypeptide of `drug` carries `gene` as its gene name.
/// Comparison is trimmed and case-insensitive.
pub fn targets_gene(drug: &XmlNode, ns: &Namespace, gene: &str) -> bool {
    let wanted = gene.trim().to_lowercase();
    let gene_name = FieldPath::text("polypeptide/gene-name");
    find_all_children(drug, ns, "targets/target")
        .into_iter()
        .filter_map(|target| gene_name.evaluate_text(target, ns))
        .any(|name| name.to_lowercase() == wanted)
}

/// One row per drug targeting `gene`; drugs without a primary id are skipped.
pub fn gene_spec(gene: &str) -> ExtractSpec {
    let query = gene.trim().to_string();
    let label = query.clone();
    ExtractSpec::new("gene", UnitPath::children("drug"))
        .filter(move |scope, ns| targets_gene(scope.item, ns, &query))
        .require(FieldPath::text("drugbank-id[@primary='true']"))
        .derived("gene", move |_, _| Some(FieldValue::Text(label.clone())))
        .field("drug_id", FieldPath::text("drugbank-id[@primary='true']"))
        .field("drug_name", FieldPath::text("name"))
        .field("products", FieldPath::list("products/product/name"))
}

/// Drugs targeting `gene`; `NotFound` if there are none.
pub fn drugs_for_gene(document: &Document, extractor: &Extractor, gene: &str) -> Result<Table> {
    let table = extractor.run(document, &gene_spec(gene));
    if table.is_empty() {
        return Err(DrugbankError::gene_not_found(gene.trim()));
    }
    Ok(table)
}

/// Gene → drug → product network. Products named like their drug are left
/// out.
pub fn gene_network(matches: &Table, gene: &str) -> NetworkGraph {
    let mut graph = NetworkGraph::new(format!("Gene-Drug-Product Network for gene: {gene}"));
    graph.add_node(gene, NodeKind::Gene);

    for row in matches.rows() {
        let Some(drug) = row.text("drug_name") else {
            continue;
        };
        graph.add_node(drug, NodeKind::Drug);
        graph.add_edge(gene, drug);

        let drug_lower = drug.to_lowercase();
        let mut seen = FxHashSet::default();
        for product in row.list("products") {
            if product.to_lowercase() == drug_lower || !seen.insert(product.as_str()) {
                continue;
            }
            graph.add_node(product.as_str(), NodeKind::Product);
            graph.add_edge(drug, product);
        }
    }
    graph
}
