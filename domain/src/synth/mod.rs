//! Template synthesis
//!
//! The network-free last resort of the fallback chain.

mod template;

pub use template::TemplateSynthesizer;
