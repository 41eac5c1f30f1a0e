//! UniProt entry lookups.

use serde::Serialize;

use crate::extract::FieldPath;
use crate::tree::{Document, Namespace};

/// Namespace of UniProt XML entries.
pub const UNIPROT_NAMESPACE: &str = "http://uniprot.org/uniprot";

/// Public UniProt endpoint serving `{id}.xml` entries.
pub const DEFAULT_BASE_URL: &str = "https://www.uniprot.org/uniprot";

/// The two free-text annotations read from a UniProt entry.
///
/// Missing annotations are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UniprotDetails {
    pub function: String,
    pub subcellular_location: String,
}

impl UniprotDetails {
    pub fn is_empty(&self) -> bool {
        self.function.is_empty() && self.subcellular_location.is_empty()
    }
}

/// URL of the XML entry for `id`.
pub fn entry_url(base_url: &str, id: &str) -> String {
    format!("{}/{}.xml", base_url.trim_end_matches('/'), id.trim())
}

/// Read the annotations out of an entry document. Unparseable input yields
/// empty annotations.
pub fn parse_entry(xml: &[u8]) -> UniprotDetails {
    let document = match Document::parse(xml) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Unreadable UniProt entry: {e}");
            return UniprotDetails::default();
        }
    };
    let ns = Namespace::new(UNIPROT_NAMESPACE);
    UniprotDetails {
        function: first_comment(&document, &ns, "function"),
        subcellular_location: first_comment(&document, &ns, "subcellular location"),
    }
}

/// Text of the first `comment` of type `kind` that has a non-blank `text`.
fn first_comment(document: &Document, ns: &Namespace, kind: &str) -> String {
    let comments = FieldPath::text(&format!("entry/comment[@type='{kind}']"));
    let text = FieldPath::text("text");
    comments
        .select_all(document.root(), ns)
        .into_iter()
        .find_map(|comment| text.evaluate_text(comment, ns))
        .unwrap_or_default()
}

#[cfg(feature = "remote")]
pub use client::UniprotClient;

#[cfg(feature = "remote")]
mod client {
    use std::time::Duration;

    use super::{UniprotDetails, entry_url, parse_entry};
    use crate::error::{DrugbankError, Result};

    /// Blocking UniProt client with a bounded timeout.
    #[derive(Clone, Debug)]
    pub struct UniprotClient {
        base_url: String,
        client: reqwest::blocking::Client,
    }

    impl UniprotClient {
        pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .user_agent("Mozilla/5.0")
                .build()
                .map_err(|e| DrugbankError::http(format!("Failed to create HTTP client: {e}")))?;
            Ok(Self {
                base_url: base_url.into(),
                client,
            })
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        /// Fetch and parse the entry for `id`.
        ///
        /// Transport failures and non-success statuses give empty details.
        pub fn fetch(&self, id: &str) -> UniprotDetails {
            match self.try_fetch(id) {
                Ok(details) => details,
                Err(e) => {
                    tracing::warn!("Error fetching UniProt details for {id}: {e}");
                    UniprotDetails::default()
                }
            }
        }

        fn try_fetch(&self, id: &str) -> Result<UniprotDetails> {
            let url = entry_url(&self.base_url, id);
            tracing::debug!("Fetching {url}");

            let response = self
                .client
                .get(&url)
                .send()
                .map_err(|e| DrugbankError::http(format!("Request failed: {e}")))?;
            let status = response.status();
            if !status.is_success() {
                return Err(DrugbankError::http(format!("HTTP {status} for {url}")));
            }
            let body = response
                .bytes()
                .map_err(|e| DrugbankError::http(format!("Failed to read response body: {e}")))?;
            Ok(parse_entry(&body))
        }
    }
}
