//! Drug targets and where in the cell they sit.

use crate::chart::{count_categories, top_n_with_other};
use crate::extract::{ExtractSpec, FieldPath, FieldValue, GENATLAS, Table, UnitPath, cross_reference};

/// Slices kept before the remainder is folded into "Other".
pub const LOCATION_TOP_N: usize = 5;

/// One row per target (at any depth below a drug) that has a polypeptide.
pub fn target_spec() -> ExtractSpec {
    let polypeptide = FieldPath::text("polypeptide");
    ExtractSpec::new("targets", UnitPath::descendants("drug", "target"))
        .require(FieldPath::text("polypeptide"))
        .owner_field("drug_id", FieldPath::text("drugbank-id[@primary='true']"))
        .field("target_id", FieldPath::text("id"))
        .field("source", FieldPath::attribute("polypeptide", "source"))
        .field("external_id", FieldPath::attribute("polypeptide", "id"))
        .field("polypeptide_name", FieldPath::text("polypeptide/name"))
        .field("gene_name", FieldPath::text("polypeptide/gene-name"))
        .derived("genatlas_id", move |scope, ns| {
            polypeptide
                .select(scope.item, ns)
                .and_then(|p| cross_reference(p, ns, GENATLAS))
                .map(FieldValue::Text)
        })
        .field("chromosome", FieldPath::text("polypeptide/chromosome-location"))
        .field(
            "cellular_location",
            FieldPath::text("polypeptide/cellular-location"),
        )
}

/// Cellular-location frequencies: the `top_n` most common, then "Other".
/// Targets with no location are not counted.
pub fn location_counts(targets: &Table, top_n: usize) -> Vec<(String, usize)> {
    let locations = targets
        .rows()
        .iter()
        .filter_map(|row| row.text("cellular_location"));
    top_n_with_other(count_categories(locations), top_n)
}
