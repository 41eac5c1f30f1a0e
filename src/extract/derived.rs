//! Values computed from more than one raw lookup.

use super::path::FieldPath;
use crate::tree::{Namespace, XmlNode, children_named, find_all_children, text_or_absent};

// ============================================================================
// REGULATORY AGENCY
// ============================================================================

/// Which agency registered a product.
///
/// The FDA application number is checked before the EMA product code; a
/// product carrying both is an FDA product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Agency {
    Fda,
    Ema,
    None,
}

impl Agency {
    /// Decide from the two optional identifier texts.
    pub fn from_identifiers(fda_application: Option<&str>, ema_product: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
        if present(fda_application) {
            Agency::Fda
        } else if present(ema_product) {
            Agency::Ema
        } else {
            Agency::None
        }
    }

    /// Decide from a `product` node.
    pub fn of_product(product: &XmlNode, ns: &Namespace) -> Self {
        let fda = FieldPath::text("fda-application-number").evaluate_text(product, ns);
        let ema = FieldPath::text("ema-product-code").evaluate_text(product, ns);
        Self::from_identifiers(fda.as_deref(), ema.as_deref())
    }

    pub fn country(self) -> Option<&'static str> {
        match self {
            Agency::Fda => Some("USA"),
            Agency::Ema => Some("EU"),
            Agency::None => None,
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Agency::Fda => Some("FDA"),
            Agency::Ema => Some("EMA"),
            Agency::None => None,
        }
    }
}

// ============================================================================
// CROSS REFERENCES
// ============================================================================

/// Resource name of the GenAtlas gene database.
pub const GENATLAS: &str = "GenAtlas";
/// Resource name of the UniProt knowledge base.
pub const UNIPROTKB: &str = "UniProtKB";

/// Identifier of the first `external-identifier` under `polypeptide` whose
/// `resource` equals `resource` exactly.
pub fn cross_reference(polypeptide: &XmlNode, ns: &Namespace, resource: &str) -> Option<String> {
    find_all_children(
        polypeptide,
        ns,
        "external-identifiers/external-identifier",
    )
    .into_iter()
    .find(|entry| {
        text_or_absent(children_named(entry, ns, "resource").next()).as_deref() == Some(resource)
    })
    .and_then(|entry| text_or_absent(children_named(entry, ns, "identifier").next()))
}

/// First `resource` cross reference across every target polypeptide of a drug.
pub fn drug_cross_reference(drug: &XmlNode, ns: &Namespace, resource: &str) -> Option<String> {
    find_all_children(drug, ns, "targets/target/polypeptide")
        .into_iter()
        .find_map(|polypeptide| cross_reference(polypeptide, ns, resource))
}

// ============================================================================
// IDENTIFIERS AND TEXT
// ============================================================================

/// Primary DrugBank id of a drug, falling back to its first `drugbank-id`.
pub fn primary_id(drug: &XmlNode, ns: &Namespace) -> Option<String> {
    FieldPath::text("drugbank-id[@primary='true']")
        .evaluate_text(drug, ns)
        .or_else(|| FieldPath::text("drugbank-id").evaluate_text(drug, ns))
}

/// Replace line breaks with single spaces.
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}
