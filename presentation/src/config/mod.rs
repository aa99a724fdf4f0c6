//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use facts_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Cards,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Maximum names shown by `/suggest`
    pub suggestion_limit: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            suggestion_limit: 8,
        }
    }
}

impl ReplConfig {
    /// Configured history file, or `$XDG_DATA_HOME/country-facts/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => dirs::data_dir().map(|p| p.join("country-facts").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path() {
        let config = ReplConfig {
            history_file: Some("/tmp/facts-history".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/facts-history")));
    }

    #[test]
    fn test_blank_history_path_uses_default() {
        let config = ReplConfig {
            history_file: Some("  ".to_string()),
            ..Default::default()
        };
        if let Some(path) = config.history_path() {
            assert!(path.ends_with("country-facts/history.txt"));
        }
    }
}
