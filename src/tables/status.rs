//! Approval status flags derived from each drug's `groups`.

use serde::Serialize;

use crate::extract::{ExtractSpec, FieldPath, FieldValue, Table, UnitPath};
use crate::tree::{Namespace, XmlNode, find_all_children, text_or_absent};

fn groups(drug: &XmlNode, ns: &Namespace) -> Vec<String> {
    find_all_children(drug, ns, "groups/group")
        .into_iter()
        .filter_map(|g| text_or_absent(Some(g)))
        .map(|g| g.to_lowercase())
        .collect()
}

fn has_group(drug: &XmlNode, ns: &Namespace, accepted: &[&str]) -> Option<FieldValue> {
    let groups = groups(drug, ns);
    Some(FieldValue::Flag(
        groups.iter().any(|g| accepted.contains(&g.as_str())),
    ))
}

/// One row per drug with four status flags.
///
/// `experimental` covers both the experimental and investigational groups.
pub fn status_spec() -> ExtractSpec {
    ExtractSpec::new("status", UnitPath::children("drug"))
        .field("drug_id", FieldPath::text("drugbank-id[@primary='true']"))
        .derived("approved", |s, ns| has_group(s.item, ns, &["approved"]))
        .derived("withdrawn", |s, ns| has_group(s.item, ns, &["withdrawn"]))
        .derived("experimental", |s, ns| {
            has_group(s.item, ns, &["experimental", "investigational"])
        })
        .derived("vet_approved", |s, ns| {
            has_group(s.item, ns, &["vet_approved"])
        })
}

/// Totals over a status table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub approved: usize,
    pub withdrawn: usize,
    pub experimental: usize,
    pub vet_approved: usize,
    pub approved_not_withdrawn: usize,
}

impl StatusSummary {
    pub fn from_table(status: &Table) -> Self {
        let mut summary = Self::default();
        for row in status.rows() {
            let approved = row.flag("approved");
            let withdrawn = row.flag("withdrawn");
            summary.approved += usize::from(approved);
            summary.withdrawn += usize::from(withdrawn);
            summary.experimental += usize::from(row.flag("experimental"));
            summary.vet_approved += usize::from(row.flag("vet_approved"));
            summary.approved_not_withdrawn += usize::from(approved && !withdrawn);
        }
        summary
    }

    /// Labelled counts sorted ascending; ties keep the listed order.
    pub fn sorted_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts = vec![
            ("Approved", self.approved),
            ("Withdrawn", self.withdrawn),
            ("Experimental/Investigational", self.experimental),
            ("Vet Approved", self.vet_approved),
        ];
        counts.sort_by_key(|(_, c)| *c);
        counts
    }
}
