//! Pool-based synthetic record generation.
//!
//! The children of the first [`POOL_SOURCE_COUNT`] units are copied into
//! per-tag [`Pools`]. Each synthesized unit gets a fresh sequential
//! identifier and one independently sampled sub-tree per pooled tag, so
//! fields of one synthetic drug may come from different source drugs.
//!
//! ```text
//! units[..100] ──▶ Pools { name: [..], description: [..], .. }
//!                     │ Sampler::pick per tag
//!                     ▼
//! drug(attrs of units[0]) ─ drugbank-id(primary, DB{max+1}) ─ sampled children
//! ```

mod generator;
mod ids;
mod pool;
mod sampler;

pub use generator::{
    DEFAULT_TARGET_TOTAL, GenerationReport, Generated, Generator, POOL_SOURCE_COUNT,
};
pub use ids::IdFormat;
pub use pool::Pools;
pub use sampler::{FirstSampler, RandomSampler, Sampler};
