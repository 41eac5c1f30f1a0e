//! Settings loaded from a YAML file.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! reference behaviour:
//!
//! ```yaml
//! input: drugbank_partial.xml
//! namespace: http://www.drugbank.ca
//! generator:
//!   target_total: 200
//!   pool_size: 100
//!   id_prefix: DB
//!   id_width: 5
//!   seed: 42
//!   output: drugbank_partial_and_generated.xml
//! uniprot:
//!   base_url: https://www.uniprot.org/uniprot
//!   timeout_secs: 10
//! server:
//!   bind: 127.0.0.1:8000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DrugbankError, Result};
use crate::remote::DEFAULT_BASE_URL;
use crate::synth::{DEFAULT_TARGET_TOTAL, Generator, IdFormat, POOL_SOURCE_COUNT};
use crate::tree::{Document, Namespace};

// ============================================================================
// TOP LEVEL
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// DrugBank export to read.
    pub input: PathBuf,
    /// Namespace URI of the export; read from the document root when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub generator: GeneratorSettings,
    pub uniprot: UniprotSettings,
    pub server: ServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("drugbank_partial.xml"),
            namespace: None,
            generator: GeneratorSettings::default(),
            uniprot: UniprotSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| DrugbankError::yaml(e.to_string()))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_yaml_str(&text)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DrugbankError::yaml(e.to_string()))
    }

    /// Explicit namespace, if configured.
    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace.as_deref().map(Namespace::new)
    }

    /// The configured namespace, else the one declared on `document`.
    pub fn namespace_for(&self, document: &Document) -> Namespace {
        self.namespace().unwrap_or_else(|| Namespace::of(document))
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub target_total: usize,
    pub pool_size: usize,
    pub id_prefix: String,
    pub id_width: usize,
    /// Fixed seed for reproducible runs; entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        let id = IdFormat::default();
        Self {
            target_total: DEFAULT_TARGET_TOTAL,
            pool_size: POOL_SOURCE_COUNT,
            id_prefix: id.prefix,
            id_width: id.width,
            seed: None,
            output: PathBuf::from("drugbank_partial_and_generated.xml"),
        }
    }
}

impl GeneratorSettings {
    pub fn generator(&self, ns: Namespace) -> Generator {
        Generator::new(ns, self.target_total)
            .with_pool_size(self.pool_size)
            .with_id_format(IdFormat::new(self.id_prefix.as_str(), self.id_width))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniprotSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UniprotSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl UniprotSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}
