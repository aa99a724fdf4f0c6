//! Application-level configuration.
//!
//! - [`ResolverConfig`]: order of the fact-source fallback chain

pub mod resolver_config;

pub use resolver_config::{ResolverConfig, SourceStep};
