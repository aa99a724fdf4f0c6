//! Country catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Fetch the country list for suggestions
    pub enabled: bool,
    /// Endpoint returning an array of country objects
    pub url: String,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://restcountries.com/v3.1/all?fields=name".to_string(),
        }
    }
}
