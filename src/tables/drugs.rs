//! Per-drug tables: core fields, synonyms, and the detail view.

use crate::chart::{NetworkGraph, NodeKind};
use crate::error::{DrugbankError, Result};
use crate::extract::{
    ExtractSpec, FieldPath, FieldValue, Record, Table, UNIPROTKB, UnitPath, collapse_newlines,
    drug_cross_reference,
};

const PRIMARY_ID: &str = "drugbank-id[@primary='true']";

/// One row per drug with its descriptive fields.
pub fn drug_spec() -> ExtractSpec {
    with_drug_fields(ExtractSpec::new("drugs", UnitPath::children("drug")), false)
}

/// One row per drug with its synonym list.
pub fn synonym_spec() -> ExtractSpec {
    ExtractSpec::new("synonyms", UnitPath::children("drug"))
        .field("drug_id", FieldPath::text(PRIMARY_ID))
        .field("name", FieldPath::text("name"))
        .field("synonyms", FieldPath::list("synonyms/synonym"))
}

/// Drug fields with newline-free long texts and the first UniProtKB
/// cross reference among the drug's targets.
pub fn detail_spec() -> ExtractSpec {
    with_drug_fields(ExtractSpec::new("details", UnitPath::children("drug")), true).derived(
        "uniprot_id",
        |scope, ns| drug_cross_reference(scope.item, ns, UNIPROTKB).map(FieldValue::Text),
    )
}

fn with_drug_fields(spec: ExtractSpec, collapse: bool) -> ExtractSpec {
    let spec = spec
        .field("drug_id", FieldPath::text(PRIMARY_ID))
        .field("name", FieldPath::text("name"))
        .field("type", FieldPath::attribute("", "type"));
    let spec = long_text(spec, "description", "description", collapse)
        .field("state", FieldPath::text("state"))
        .field("indications", FieldPath::text("indication"));
    long_text(spec, "mechanism", "mechanism-of-action", collapse)
        .field("food_interactions", FieldPath::text("food-interactions"))
}

fn long_text(spec: ExtractSpec, column: &str, tag: &'static str, collapse: bool) -> ExtractSpec {
    if !collapse {
        return spec.field(column, FieldPath::text(tag));
    }
    let path = FieldPath::text(tag);
    spec.derived(column, move |scope, ns| {
        path.evaluate_text(scope.item, ns)
            .map(|text| FieldValue::Text(collapse_newlines(&text)))
    })
}

/// The row of `table` whose `drug_id` equals `drug_id`.
pub fn find_drug<'a>(table: &'a Table, drug_id: &str) -> Result<&'a Record> {
    table
        .find("drug_id", drug_id)
        .ok_or_else(|| DrugbankError::drug_not_found(drug_id))
}

/// Star graph linking a drug's name to each of its distinct synonyms.
pub fn synonym_graph(synonyms: &Table, drug_id: &str) -> Result<NetworkGraph> {
    let record = find_drug(synonyms, drug_id)?;
    let name = record.text("name").unwrap_or(drug_id);

    let mut graph = NetworkGraph::new(format!("Synonyms Graph for {drug_id} ({name})"));
    graph.add_node(name, NodeKind::Drug);
    for synonym in record.list("synonyms") {
        if synonym != name {
            graph.add_node(synonym.as_str(), NodeKind::Synonym);
            graph.add_edge(name, synonym);
        }
    }
    tracing::debug!(
        "Synonym graph for {drug_id}: {} nodes",
        graph.node_count()
    );
    Ok(graph)
}
