//! Resolver configuration from TOML (`[resolver]` section)

use facts_application::{ResolverConfig, SourceStep};
use facts_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw resolver configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    /// Fallback order: any of "curated", "remote", "template"
    pub order: Vec<String>,
    /// Seed for template synthesis (random when unset)
    pub seed: Option<u64>,
}

impl Default for FileResolverConfig {
    fn default() -> Self {
        Self {
            order: vec![
                "curated".to_string(),
                "remote".to_string(),
                "template".to_string(),
            ],
            seed: None,
        }
    }
}

impl FileResolverConfig {
    /// Parse the order, skipping unknown steps
    pub fn to_resolver_config(&self) -> (ResolverConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut order = Vec::new();

        for raw in &self.order {
            match raw.parse::<SourceStep>() {
                Ok(step) => order.push(step),
                Err(e) => issues.push(ConfigIssue::warning(
                    "resolver.order",
                    format!("resolver.order: {}, ignoring it", e),
                )),
            }
        }

        if order.is_empty() {
            return (ResolverConfig::default(), issues);
        }
        (ResolverConfig::default().with_order(order), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_step_skipped() {
        let config = FileResolverConfig {
            order: vec!["remote".to_string(), "cache".to_string()],
            seed: None,
        };
        let (resolver, issues) = config.to_resolver_config();
        assert_eq!(resolver.order, vec![SourceStep::Remote]);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_order_uses_default() {
        let config = FileResolverConfig {
            order: vec![],
            seed: None,
        };
        assert_eq!(config.to_resolver_config().0, ResolverConfig::default());
    }
}
