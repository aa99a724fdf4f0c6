//! Fact entities

use super::source::FactSource;
use serde::{Deserialize, Serialize};

/// Minimum number of facts in a resolved batch
pub const MIN_FACTS: usize = 3;

/// Maximum number of facts in a resolved batch
pub const MAX_FACTS: usize = 4;

/// A single fact, rendered as one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    pub title: String,
    pub content: String,
}

impl FactRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Default title for the `n`th fact (1-based) when a source omits one
    pub fn default_title(n: usize) -> String {
        format!("Fact {}", n)
    }
}

/// The result of one resolution: the facts plus where they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactBatch {
    /// Country name as entered by the user
    pub country: String,
    pub facts: Vec<FactRecord>,
    pub source: FactSource,
}

impl FactBatch {
    pub fn new(country: impl Into<String>, facts: Vec<FactRecord>, source: FactSource) -> Self {
        Self {
            country: country.into(),
            facts,
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
