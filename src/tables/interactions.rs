//! Drug-drug interactions, one row per interaction entry.

use crate::extract::{ExtractSpec, FieldPath, FieldValue, UnitPath, primary_id};
use crate::tree::{Namespace, XmlNode};

/// Attribute value when non-empty, otherwise the trimmed child text.
fn attribute_or_child(node: &XmlNode, ns: &Namespace, name: &str) -> Option<FieldValue> {
    node.attribute(name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| FieldPath::text(name).evaluate_text(node, ns))
        .map(FieldValue::Text)
}

pub fn interaction_spec() -> ExtractSpec {
    ExtractSpec::new(
        "interactions",
        UnitPath::children("drug/drug-interactions/drug-interaction"),
    )
    .derived("drugbank_id", |scope, ns| {
        primary_id(scope.owner, ns).map(FieldValue::Text)
    })
    .owner_field("drug_official_name", FieldPath::text("name"))
    .derived("interacting_drugbank_id", |scope, ns| {
        attribute_or_child(scope.item, ns, "drugbank-id")
    })
    .derived("interacting_drug_name", |scope, ns| {
        attribute_or_child(scope.item, ns, "name")
    })
    .field("description", FieldPath::text("description"))
}
