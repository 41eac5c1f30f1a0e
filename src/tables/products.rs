//! One row per marketed product, flattened across all drugs.

use crate::extract::{Agency, ExtractSpec, FieldPath, FieldValue, UnitPath};

pub fn product_spec() -> ExtractSpec {
    ExtractSpec::new("products", UnitPath::children("drug/products/product"))
        .owner_field("drug_id", FieldPath::text("drugbank-id[@primary='true']"))
        .field("product_name", FieldPath::text("name"))
        .field("producer", FieldPath::text("labeller"))
        .field("ndc_product_code", FieldPath::text("ndc-product-code"))
        .field("dosage_form", FieldPath::text("dosage-form"))
        .field("route", FieldPath::text("route"))
        .field("strength", FieldPath::text("strength"))
        .derived("country", |scope, ns| {
            Agency::of_product(scope.item, ns).country().map(FieldValue::from)
        })
        .derived("regulatory_agency", |scope, ns| {
            Agency::of_product(scope.item, ns).name().map(FieldValue::from)
        })
}
