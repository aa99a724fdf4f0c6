//! User settings
//!
//! A bearer token and the direct remote-model switch. Persisted by the
//! settings store adapter until the user clears them.

use serde::{Deserialize, Serialize};

/// User-controlled settings for direct remote-model mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bearer token for hosted endpoints
    pub api_token: Option<String>,
    /// Whether direct remote-model mode is enabled
    pub remote_enabled: bool,
}

impl Settings {
    /// Token, if set and non-blank
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Direct mode is usable only when enabled and a token is present
    pub fn direct_mode_ready(&self) -> bool {
        self.remote_enabled && self.token().is_some()
    }
}
