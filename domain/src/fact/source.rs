//! Fact source label

use serde::{Deserialize, Serialize};

/// Which step of the fallback chain produced a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactSource {
    /// Hand-authored table
    Curated,
    /// A remote generator, labelled with the model that answered
    Remote { model: String },
    /// Template synthesis
    Template,
}

impl FactSource {
    /// Human-readable label shown next to the facts
    pub fn label(&self) -> &str {
        match self {
            FactSource::Curated => "Curated Database",
            FactSource::Remote { model } => model,
            FactSource::Template => "Intelligent System",
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, FactSource::Remote { .. })
    }
}

impl std::fmt::Display for FactSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(FactSource::Curated.label(), "Curated Database");
        assert_eq!(FactSource::Template.label(), "Intelligent System");
        let remote = FactSource::Remote {
            model: "DeepSeek-R1".to_string(),
        };
        assert_eq!(remote.to_string(), "DeepSeek-R1");
        assert!(remote.is_remote());
    }
}
