//! Session state
//!
//! The only state that survives between requests: the last resolved country
//! and the source that produced it. Overwritten on every resolution.

use facts_domain::{FactBatch, FactSource};

/// Per-user session state, owned by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct FactSession {
    last_country: Option<String>,
    last_source: Option<FactSource>,
}

impl FactSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the country and source of a freshly resolved batch
    pub fn record(&mut self, batch: &FactBatch) {
        self.last_country = Some(batch.country.clone());
        self.last_source = Some(batch.source.clone());
    }

    pub fn last_country(&self) -> Option<&str> {
        self.last_country.as_deref()
    }

    pub fn last_source(&self) -> Option<&FactSource> {
        self.last_source.as_ref()
    }
}
