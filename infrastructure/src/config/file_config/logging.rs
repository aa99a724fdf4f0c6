//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated log files (console only when unset)
    pub dir: Option<String>,
    /// `EnvFilter` directive for the file log (defaults to "info")
    pub filter: Option<String>,
}
