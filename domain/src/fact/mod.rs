//! Fact domain
//!
//! The [`FactRecord`] is the universal currency of the system: every source,
//! curated, remote or synthesized, ends up as a batch of them.

pub mod entities;
pub mod normalize;
pub mod source;

pub use entities::{FactBatch, FactRecord, MAX_FACTS, MIN_FACTS};
pub use normalize::{NormalizeError, RawFact, RawResponse};
pub use source::FactSource;
