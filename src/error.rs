//! Error types for loading, extracting and generating DrugBank data.

use thiserror::Error;

/// Errors surfaced to callers of the library.
///
/// Missing nodes and attributes inside a record are never errors; they flow
/// into the output as absent fields. Only boundary conditions end up here.
#[derive(Debug, Error)]
pub enum DrugbankError {
    /// XML parsing or serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A lookup by key (drug id, gene, drug name) found nothing.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// Caller supplied arguments that cannot be honoured.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failure talking to a remote service.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl DrugbankError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an HTTP error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// A drug looked up by its DrugBank id or name was not present.
    pub fn drug_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "drug",
            key: key.into(),
        }
    }

    /// No drug targets the requested gene.
    pub fn gene_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "gene",
            key: key.into(),
        }
    }

    /// Whether this error is a "not found" outcome rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = DrugbankError> = std::result::Result<T, E>;
