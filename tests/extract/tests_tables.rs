use drugbank::chart::NodeKind;
use drugbank::tables;

use crate::helpers::fixtures::SAMPLE_EXPORT;
use crate::helpers::run;

#[test]
fn test_drug_columns_in_order() {
    let table = run(SAMPLE_EXPORT, &tables::drug_spec());
    assert_eq!(
        table.columns(),
        [
            "drug_id",
            "name",
            "type",
            "description",
            "state",
            "indications",
            "mechanism",
            "food_interactions",
        ]
    );
    let lepirudin = &table.rows()[0];
    assert_eq!(lepirudin.text("drug_id"), Some("DB00001"));
    assert_eq!(lepirudin.text("type"), Some("biotech"));
    assert_eq!(lepirudin.text("state"), Some("liquid"));
}

#[test]
fn test_details_collapse_newlines_and_find_uniprot() {
    let table = run(SAMPLE_EXPORT, &tables::detail_spec());
    let record = tables::find_drug(&table, "DB00001").unwrap();
    let description = record.text("description").unwrap();
    assert!(!description.contains('\n'));
    assert!(description.starts_with("Lepirudin is identical to natural hirudin except"));
    assert_eq!(record.text("uniprot_id"), Some("P00734"));

    let bivalirudin = tables::find_drug(&table, "DB00006").unwrap();
    assert!(bivalirudin.get("uniprot_id").is_none());

    assert!(tables::find_drug(&table, "DB99999").unwrap_err().is_not_found());
}

#[test]
fn test_synonym_graph() {
    let table = run(SAMPLE_EXPORT, &tables::synonym_spec());
    assert_eq!(
        table.rows()[0].list("synonyms"),
        ["Hirudin variant-1", "Lepirudin recombinant"]
    );

    let graph = tables::synonym_graph(&table, "DB00001").unwrap();
    assert_eq!(graph.kind_of("Lepirudin"), Some(NodeKind::Drug));
    assert_eq!(graph.kind_of("Hirudin variant-1"), Some(NodeKind::Synonym));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_status_summary() {
    let table = run(SAMPLE_EXPORT, &tables::status_spec());
    let summary = tables::StatusSummary::from_table(&table);
    assert_eq!(summary.approved, 2);
    assert_eq!(summary.withdrawn, 1);
    assert_eq!(summary.experimental, 1);
    assert_eq!(summary.vet_approved, 0);
    assert_eq!(summary.approved_not_withdrawn, 1);

    let sermorelin = table.find("drug_id", "DB00010").unwrap();
    assert!(!sermorelin.flag("approved"));
}

#[test]
fn test_interactions_attribute_and_child_forms() {
    let table = run(SAMPLE_EXPORT, &tables::interaction_spec());
    let rows: Vec<_> = table
        .rows()
        .iter()
        .map(|r| {
            (
                r.text("drugbank_id"),
                r.text("interacting_drugbank_id"),
                r.text("interacting_drug_name"),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some("DB00001"), Some("DB06605"), Some("Apixaban")),
            (Some("DB00006"), Some("DB00001"), Some("Lepirudin")),
        ]
    );
}

#[test]
fn test_location_counts() {
    let table = run(SAMPLE_EXPORT, &tables::target_spec());
    assert_eq!(
        tables::location_counts(&table, tables::LOCATION_TOP_N),
        vec![("Secreted".to_string(), 2)]
    );
}

#[test]
fn test_gene_network_skips_drug_named_products() {
    let document = crate::helpers::parse(SAMPLE_EXPORT);
    let extractor = drugbank::Extractor::for_document(&document);
    let matches = tables::drugs_for_gene(&document, &extractor, "F2").unwrap();
    assert_eq!(matches.rows()[0].list("products"), ["Refludan", "Refludan"]);

    let graph = tables::gene_network(&matches, "F2");
    assert_eq!(graph.kind_of("F2"), Some(NodeKind::Gene));
    assert_eq!(graph.kind_of("Refludan"), Some(NodeKind::Product));
    assert!(graph.has_edge("F2", "Bivalirudin"));
    assert!(graph.has_edge("Bivalirudin", "Angiomax"));
    // gene, two drugs, two distinct products
    assert_eq!(graph.node_count(), 5);
}
