//! Remote source configuration from TOML (`[remote]` section)

use crate::sources::RemoteKind;
use facts_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw remote source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRemoteConfig {
    /// "self_hosted", "hosted_inference", "chat_completion" or "none"
    pub kind: String,
    /// Base URL (defaults depend on `kind`)
    pub base_url: Option<String>,
    /// Model identifier (defaults depend on `kind`)
    pub model: Option<String>,
    /// Environment variable holding the bearer token for direct modes
    pub api_key_env: String,
    /// Generation length limit sent to hosted endpoints
    pub max_new_tokens: u32,
    /// Sampling temperature sent to hosted endpoints
    pub temperature: f32,
    /// Use the remote model for follow-up questions too
    pub chat: bool,
}

impl Default for FileRemoteConfig {
    fn default() -> Self {
        Self {
            kind: "self_hosted".to_string(),
            base_url: None,
            model: None,
            api_key_env: "FACTS_API_TOKEN".to_string(),
            max_new_tokens: 300,
            temperature: 0.8,
            chat: true,
        }
    }
}

impl FileRemoteConfig {
    /// Parse `kind`, falling back to [`RemoteKind::None`] on unknown values
    pub fn parse_kind(&self) -> (RemoteKind, Vec<ConfigIssue>) {
        match self.kind.parse::<RemoteKind>() {
            Ok(kind) => (kind, Vec::new()),
            Err(e) => (
                RemoteKind::None,
                vec![ConfigIssue::warning(
                    "remote.kind",
                    format!("remote.kind: {}, remote source disabled", e),
                )],
            ),
        }
    }

    /// Replace `kind` with a command-line value, rejecting unknown kinds
    pub fn override_kind(&mut self, raw: &str) -> Result<RemoteKind, String> {
        let kind = raw.parse::<RemoteKind>()?;
        self.kind = kind.as_str().to_string();
        Ok(kind)
    }

    /// Configured base URL or the default for `kind`, without trailing slash
    pub fn base_url_for(&self, kind: RemoteKind) -> String {
        self.base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| kind.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Configured model or the default for `kind`
    pub fn model_for(&self, kind: RemoteKind) -> Option<String> {
        self.model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| kind.default_model().map(str::to_string))
    }

    /// Token from the configured environment variable
    pub fn env_token(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (kind, mut issues) = self.parse_kind();

        if let Some(url) = &self.base_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            issues.push(ConfigIssue::error(
                "remote.base_url",
                format!("remote.base_url: '{}' is not an http(s) URL", url),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                "remote.temperature",
                format!("remote.temperature: {} is outside 0.0..=2.0", self.temperature),
            ));
        }

        if kind != RemoteKind::None && self.max_new_tokens == 0 {
            issues.push(ConfigIssue::warning(
                "remote.max_new_tokens",
                "remote.max_new_tokens is 0; the model cannot produce any text",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_kind() {
        let config = FileRemoteConfig::default();
        assert_eq!(config.parse_kind().0, RemoteKind::SelfHosted);
        assert_eq!(
            config.base_url_for(RemoteKind::SelfHosted),
            "http://localhost:5000"
        );
        assert!(config.model_for(RemoteKind::ChatCompletion).is_some());
        assert!(config.model_for(RemoteKind::SelfHosted).is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = FileRemoteConfig {
            base_url: Some("http://gpu-box:8000/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url_for(RemoteKind::SelfHosted), "http://gpu-box:8000");
    }

    #[test]
    fn test_invalid_url_is_error() {
        let config = FileRemoteConfig {
            base_url: Some("localhost:5000".to_string()),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_override_kind() {
        let mut config = FileRemoteConfig::default();
        assert_eq!(config.override_kind("chat"), Ok(RemoteKind::ChatCompletion));
        assert_eq!(config.kind, "chat_completion");

        assert!(config.override_kind("chatt").is_err());
        // a rejected override leaves the previous kind in place
        assert_eq!(config.kind, "chat_completion");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_unknown_kind_disables_remote() {
        let config = FileRemoteConfig {
            kind: "smoke_signals".to_string(),
            ..Default::default()
        };
        let (kind, issues) = config.parse_kind();
        assert_eq!(kind, RemoteKind::None);
        assert_eq!(issues[0].field, "remote.kind");
    }
}
