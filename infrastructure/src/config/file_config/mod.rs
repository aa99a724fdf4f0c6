//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod logging;
mod output;
mod remote;
mod repl;
mod resolver;

pub use catalog::FileCatalogConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use remote::FileRemoteConfig;
pub use repl::FileReplConfig;
pub use resolver::FileResolverConfig;

use facts_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fallback chain settings
    pub resolver: FileResolverConfig,
    /// Remote fact source settings
    pub remote: FileRemoteConfig,
    /// Country name list for suggestions
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Unknown steps in `resolver.order`
    /// 2. Unknown `remote.kind` and missing URLs/models
    /// 3. An enabled catalog without a URL
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.resolver.to_resolver_config().1);
        issues.extend(self.remote.validate());

        if self.catalog.enabled && self.catalog.url.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "catalog.url",
                "catalog.url is empty; country suggestions are disabled",
            ));
        }

        issues
    }
}
