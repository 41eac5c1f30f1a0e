//! The concrete extractions run against a DrugBank export.
//!
//! Each `*_spec` function returns a declarative [`ExtractSpec`]; the
//! remaining functions post-process the resulting tables.
//!
//! | Spec               | Unit                                     |
//! |--------------------|------------------------------------------|
//! | `drug_spec`        | `drug`                                   |
//! | `synonym_spec`     | `drug`                                   |
//! | `detail_spec`      | `drug`                                   |
//! | `product_spec`     | `drug/products/product`                  |
//! | `pathway_spec`     | `drug/pathways/pathway`                  |
//! | `target_spec`      | `target` anywhere below a `drug`         |
//! | `status_spec`      | `drug`                                   |
//! | `interaction_spec` | `drug/drug-interactions/drug-interaction`|
//! | `gene_spec`        | `drug` targeting the gene                |
//!
//! [`ExtractSpec`]: crate::extract::ExtractSpec

mod drugs;
mod genes;
mod interactions;
mod pathways;
mod products;
mod status;
mod targets;

pub use drugs::{detail_spec, drug_spec, find_drug, synonym_graph, synonym_spec};
pub use genes::{drugs_for_gene, gene_network, gene_spec, targets_gene};
pub use interactions::interaction_spec;
pub use pathways::{
    bipartite_graph, pathway_count_for, pathway_drug_counts, pathway_spec, sorted_counts,
};
pub use products::product_spec;
pub use status::{StatusSummary, status_spec};
pub use targets::{LOCATION_TOP_N, location_counts, target_spec};
