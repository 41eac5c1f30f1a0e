//! Secondary record sources.

mod uniprot;

#[cfg(feature = "remote")]
pub use uniprot::UniprotClient;
pub use uniprot::{DEFAULT_BASE_URL, UNIPROT_NAMESPACE, UniprotDetails, entry_url, parse_entry};
