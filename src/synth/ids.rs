//! Sequential identifiers for synthesized units.

use crate::error::{DrugbankError, Result};
use crate::tree::{Namespace, XmlNode, find_optional_child, text_or_absent};

/// A prefix followed by a zero-padded decimal sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdFormat {
    pub prefix: String,
    pub width: usize,
}

impl Default for IdFormat {
    fn default() -> Self {
        Self::new("DB", 5)
    }
}

impl IdFormat {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// `DB` + `7` → `DB00007`.
    pub fn format(&self, n: u64) -> String {
        format!("{}{:0width$}", self.prefix, n, width = self.width)
    }

    /// Numeric suffix of `id`, or `None` if it does not carry this prefix
    /// followed by digits only.
    pub fn parse_suffix(&self, id: &str) -> Option<u64> {
        let digits = id.trim().strip_prefix(self.prefix.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// One past the largest numeric suffix among the units' first
    /// identifier; malformed identifiers are ignored. Fails when the
    /// largest suffix is already `u64::MAX`.
    pub fn next_after<'a>(
        &self,
        units: impl IntoIterator<Item = &'a XmlNode>,
        ns: &Namespace,
        id_tag: &str,
    ) -> Result<u64> {
        let max = units
            .into_iter()
            .filter_map(|unit| text_or_absent(find_optional_child(unit, ns, id_tag)))
            .filter_map(|id| {
                let parsed = self.parse_suffix(&id);
                if parsed.is_none() {
                    tracing::trace!("Ignoring malformed identifier '{id}'");
                }
                parsed
            })
            .max()
            .unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            DrugbankError::validation(format!(
                "identifier {} leaves no room for new identifiers",
                self.format(max)
            ))
        })
    }
}
