//! Resolver configuration: which sources to try, in which order.

use serde::{Deserialize, Serialize};

/// One step of the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStep {
    Curated,
    Remote,
    Template,
}

impl SourceStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStep::Curated => "curated",
            SourceStep::Remote => "remote",
            SourceStep::Template => "template",
        }
    }
}

impl std::fmt::Display for SourceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curated" => Ok(SourceStep::Curated),
            "remote" => Ok(SourceStep::Remote),
            "template" => Ok(SourceStep::Template),
            other => Err(format!("unknown source step '{}'", other)),
        }
    }
}

/// Fallback-chain configuration.
///
/// The template step is the only one that cannot fail, so
/// [`effective_order`](Self::effective_order) always ends with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub order: Vec<SourceStep>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            order: vec![SourceStep::Curated, SourceStep::Remote, SourceStep::Template],
        }
    }
}

impl ResolverConfig {
    pub fn with_order(mut self, order: Vec<SourceStep>) -> Self {
        self.order = order;
        self
    }

    /// Configured order without duplicates, cut after the template step
    /// (or with it appended when missing)
    pub fn effective_order(&self) -> Vec<SourceStep> {
        let mut steps = Vec::with_capacity(self.order.len() + 1);
        for step in &self.order {
            if steps.contains(step) {
                continue;
            }
            steps.push(*step);
            if *step == SourceStep::Template {
                return steps;
            }
        }
        steps.push(SourceStep::Template);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            ResolverConfig::default().effective_order(),
            vec![SourceStep::Curated, SourceStep::Remote, SourceStep::Template]
        );
    }

    #[test]
    fn test_template_appended_when_missing() {
        let config = ResolverConfig::default().with_order(vec![SourceStep::Remote]);
        assert_eq!(
            config.effective_order(),
            vec![SourceStep::Remote, SourceStep::Template]
        );
    }

    #[test]
    fn test_steps_after_template_dropped() {
        let config = ResolverConfig::default().with_order(vec![
            SourceStep::Remote,
            SourceStep::Remote,
            SourceStep::Template,
            SourceStep::Curated,
        ]);
        assert_eq!(
            config.effective_order(),
            vec![SourceStep::Remote, SourceStep::Template]
        );
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(" Curated ".parse::<SourceStep>(), Ok(SourceStep::Curated));
        assert!("cache".parse::<SourceStep>().is_err());
    }
}
