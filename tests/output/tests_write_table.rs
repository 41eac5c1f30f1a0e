use drugbank::output::write_table;
use drugbank::tables;
use tempfile::TempDir;

use crate::helpers::fixtures::SAMPLE_EXPORT;
use crate::helpers::run;

#[test]
fn test_write_products_csv() {
    let table = run(SAMPLE_EXPORT, &tables::product_spec());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.csv");

    write_table(&table, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(
        lines[0],
        "drug_id,product_name,producer,ndc_product_code,dosage_form,route,strength,country,regulatory_agency"
    );
    assert_eq!(
        lines[1],
        "DB00001,Refludan,Bayer,50419-150,\"Powder, for solution\",Intravenous,50 mg,USA,FDA"
    );
    assert_eq!(lines[3], "DB00006,Angiomax,Sandoz,,,,,,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_write_synonyms_json() {
    let table = run(SAMPLE_EXPORT, &tables::synonym_spec());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("synonyms.JSON");

    write_table(&table, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["drug_id"], "DB00001");
    assert_eq!(
        rows[0]["synonyms"],
        serde_json::json!(["Hirudin variant-1", "Lepirudin recombinant"])
    );
    assert_eq!(rows[2]["synonyms"], serde_json::json!([]));
    assert!(rows[2]["name"].is_string());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let table = run(SAMPLE_EXPORT, &tables::drug_spec());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("drugs.csv");
    assert!(write_table(&table, &path).is_err());
}
