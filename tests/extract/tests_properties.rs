//! Properties every extraction over the sample export must hold.

use drugbank::tables;
use rstest::rstest;

use crate::helpers::fixtures::SAMPLE_EXPORT;
use crate::helpers::{parse, run};

#[rstest]
#[case::drugs(tables::drug_spec(), 3)]
#[case::synonyms(tables::synonym_spec(), 3)]
#[case::details(tables::detail_spec(), 3)]
#[case::status(tables::status_spec(), 3)]
#[case::products(tables::product_spec(), 3)]
#[case::pathways(tables::pathway_spec(), 2)]
#[case::interactions(tables::interaction_spec(), 2)]
#[case::targets(tables::target_spec(), 2)]
fn test_one_record_per_unit(#[case] spec: drugbank::ExtractSpec, #[case] expected: usize) {
    let table = run(SAMPLE_EXPORT, &spec);
    assert_eq!(table.len(), expected, "{}", spec.name());
}

#[rstest]
#[case::drugs(tables::drug_spec())]
#[case::products(tables::product_spec())]
#[case::targets(tables::target_spec())]
#[case::interactions(tables::interaction_spec())]
fn test_every_declared_column_is_a_key(#[case] spec: drugbank::ExtractSpec) {
    let table = run(SAMPLE_EXPORT, &spec);
    for row in table.rows() {
        for column in table.columns() {
            assert!(row.has_column(column), "{} missing {column}", spec.name());
        }
        assert_eq!(row.len(), table.columns().len());
    }
}

#[test]
fn test_sparse_drug_yields_absent_fields() {
    let table = run(SAMPLE_EXPORT, &tables::drug_spec());
    let sermorelin = table.find("drug_id", "DB00010").unwrap();
    assert_eq!(sermorelin.text("name"), Some("Sermorelin"));
    assert!(sermorelin.get("description").is_none());
    assert!(sermorelin.get("mechanism").is_none());
    assert!(sermorelin.get("food_interactions").is_none());
}

#[test]
fn test_extraction_does_not_modify_document() {
    let document = parse(SAMPLE_EXPORT);
    let before = document.to_xml_bytes().unwrap();
    let extractor = drugbank::Extractor::for_document(&document);
    for spec in [tables::drug_spec(), tables::product_spec(), tables::target_spec()] {
        extractor.run(&document, &spec);
    }
    assert_eq!(document.to_xml_bytes().unwrap(), before);
}

#[test]
fn test_agency_follows_identifiers() {
    let table = run(SAMPLE_EXPORT, &tables::product_spec());
    let agencies: Vec<_> = table
        .rows()
        .iter()
        .map(|r| (r.text("producer"), r.text("regulatory_agency"), r.text("country")))
        .collect();
    assert_eq!(
        agencies,
        vec![
            (Some("Bayer"), Some("FDA"), Some("USA")),
            (Some("Celgene Europe Limited"), Some("EMA"), Some("EU")),
            (Some("Sandoz"), None, None),
        ]
    );
}

#[rstest]
#[case("F2")]
#[case("f2")]
#[case("  F2 ")]
fn test_gene_match_is_case_insensitive(#[case] gene: &str) {
    let document = parse(SAMPLE_EXPORT);
    let extractor = drugbank::Extractor::for_document(&document);
    let table = tables::drugs_for_gene(&document, &extractor, gene).unwrap();
    let ids: Vec<_> = table.rows().iter().map(|r| r.text("drug_id")).collect();
    assert_eq!(ids, vec![Some("DB00001"), Some("DB00006")]);
}

#[test]
fn test_unknown_gene_is_not_found() {
    let document = parse(SAMPLE_EXPORT);
    let extractor = drugbank::Extractor::for_document(&document);
    let err = tables::drugs_for_gene(&document, &extractor, "BRCA1").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_genatlas_is_not_the_first_identifier() {
    let table = run(SAMPLE_EXPORT, &tables::target_spec());
    let first = &table.rows()[0];
    assert_eq!(first.text("genatlas_id"), Some("F2"));
    assert_eq!(first.text("chromosome"), Some("11"));

    let second = &table.rows()[1];
    assert_eq!(second.text("drug_id"), Some("DB00006"));
    assert!(second.get("genatlas_id").is_none());
}
