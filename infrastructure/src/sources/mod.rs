//! Remote fact source adapters
//!
//! Three interchangeable backends implement both
//! [`RemoteFactSource`] and [`RemoteChatModel`]:
//!
//! - [`SelfHostedBackend`]: a local `/generate-facts` + `/chat` server
//! - [`HostedInference`]: a bearer-token text-generation endpoint
//! - [`ChatCompletion`]: an OpenAI-compatible chat-completions endpoint
//!
//! Exactly one is active per configuration. The two hosted variants are
//! "direct mode" and only run when the user enabled it and supplied a token.

pub mod chat_completion;
pub mod hosted_inference;
pub mod self_hosted;

pub use chat_completion::ChatCompletion;
pub use hosted_inference::HostedInference;
pub use self_hosted::{HealthStatus, SelfHostedBackend};

use crate::config::FileRemoteConfig;
use facts_application::{RemoteChatModel, RemoteFactSource, SourceError};
use facts_domain::Settings;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which remote backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKind {
    None,
    SelfHosted,
    HostedInference,
    ChatCompletion,
}

impl RemoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteKind::None => "none",
            RemoteKind::SelfHosted => "self_hosted",
            RemoteKind::HostedInference => "hosted_inference",
            RemoteKind::ChatCompletion => "chat_completion",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            RemoteKind::None | RemoteKind::SelfHosted => "http://localhost:5000",
            RemoteKind::HostedInference => "https://api-inference.huggingface.co",
            RemoteKind::ChatCompletion => "https://api.openai.com",
        }
    }

    pub fn default_model(&self) -> Option<&'static str> {
        match self {
            RemoteKind::None | RemoteKind::SelfHosted => None,
            RemoteKind::HostedInference => Some("mistralai/Mistral-7B-Instruct-v0.3"),
            RemoteKind::ChatCompletion => Some("gpt-4o-mini"),
        }
    }

    /// Whether this kind needs the direct-mode switch and a bearer token
    pub fn is_direct(&self) -> bool {
        matches!(self, RemoteKind::HostedInference | RemoteKind::ChatCompletion)
    }
}

impl std::fmt::Display for RemoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RemoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "none" | "off" => Ok(RemoteKind::None),
            "self_hosted" | "backend" => Ok(RemoteKind::SelfHosted),
            "hosted_inference" | "inference" => Ok(RemoteKind::HostedInference),
            "chat_completion" | "chat" => Ok(RemoteKind::ChatCompletion),
            other => Err(format!("unknown remote kind '{}'", other)),
        }
    }
}

/// The active remote adapter, seen through both ports
#[derive(Clone)]
pub struct RemoteAdapters {
    pub kind: RemoteKind,
    pub facts: Arc<dyn RemoteFactSource>,
    /// `None` when `[remote] chat = false`
    pub chat: Option<Arc<dyn RemoteChatModel>>,
}

/// Build the configured remote adapter.
///
/// Returns `None` when the remote step is disabled: `kind = "none"`, or a
/// direct mode without the user's switch or a token.
pub fn build_remote(
    config: &FileRemoteConfig,
    settings: &Settings,
    client: reqwest::Client,
) -> Option<RemoteAdapters> {
    let (kind, _) = config.parse_kind();
    let base_url = config.base_url_for(kind);

    if kind.is_direct() && !settings.remote_enabled {
        info!("Direct remote mode is disabled; skipping {} source", kind);
        return None;
    }

    let token = if kind.is_direct() {
        match settings
            .token()
            .map(str::to_string)
            .or_else(|| config.env_token())
        {
            Some(token) => Some(token),
            None => {
                warn!(
                    "{} source needs an API token (settings or ${}); skipping it",
                    kind, config.api_key_env
                );
                return None;
            }
        }
    } else {
        None
    };

    let model = config.model_for(kind);
    debug!("Remote source: kind={}, base_url={}, model={:?}", kind, base_url, model);

    let (facts, chat): (Arc<dyn RemoteFactSource>, Arc<dyn RemoteChatModel>) = match kind {
        RemoteKind::None => return None,
        RemoteKind::SelfHosted => {
            let adapter = Arc::new(SelfHostedBackend::new(client, base_url));
            (
                adapter.clone() as Arc<dyn RemoteFactSource>,
                adapter as Arc<dyn RemoteChatModel>,
            )
        }
        RemoteKind::HostedInference => {
            let adapter = Arc::new(HostedInference::new(
                client,
                base_url,
                model.unwrap_or_default(),
                token.unwrap_or_default(),
                config.max_new_tokens,
                config.temperature,
            ));
            (
                adapter.clone() as Arc<dyn RemoteFactSource>,
                adapter as Arc<dyn RemoteChatModel>,
            )
        }
        RemoteKind::ChatCompletion => {
            let adapter = Arc::new(ChatCompletion::new(
                client,
                base_url,
                model.unwrap_or_default(),
                token.unwrap_or_default(),
                config.max_new_tokens,
                config.temperature,
            ));
            (
                adapter.clone() as Arc<dyn RemoteFactSource>,
                adapter as Arc<dyn RemoteChatModel>,
            )
        }
    };

    Some(RemoteAdapters {
        kind,
        facts,
        chat: config.chat.then_some(chat),
    })
}

/// Send a request and return the body of a 2xx response.
///
/// Non-success statuses are mapped with [`SourceError::from_status`].
pub(crate) async fn send_request(request: reqwest::RequestBuilder) -> Result<String, SourceError> {
    let response = request
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        debug!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );
        return Err(SourceError::from_status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| SourceError::Network(format!("Failed to read response body: {}", e)))
}

/// Decode a JSON body, mapping failures to [`SourceError::MalformedBody`]
pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_config(kind: &str) -> FileRemoteConfig {
        FileRemoteConfig {
            kind: kind.to_string(),
            api_key_env: "FACTS_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_kind_aliases() {
        assert_eq!("self-hosted".parse::<RemoteKind>(), Ok(RemoteKind::SelfHosted));
        assert_eq!("Chat".parse::<RemoteKind>(), Ok(RemoteKind::ChatCompletion));
        assert_eq!("off".parse::<RemoteKind>(), Ok(RemoteKind::None));
        assert!("ftp".parse::<RemoteKind>().is_err());
    }

    #[test]
    fn test_self_hosted_needs_no_token() {
        let remote = build_remote(
            &FileRemoteConfig::default(),
            &Settings::default(),
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(remote.kind, RemoteKind::SelfHosted);
        assert!(remote.chat.is_some());
    }

    #[test]
    fn test_direct_mode_requires_switch() {
        let settings = Settings {
            api_token: Some("hf_abc".to_string()),
            remote_enabled: false,
        };
        assert!(
            build_remote(&direct_config("hosted_inference"), &settings, reqwest::Client::new())
                .is_none()
        );
    }

    #[test]
    fn test_direct_mode_requires_token() {
        let settings = Settings {
            api_token: None,
            remote_enabled: true,
        };
        assert!(
            build_remote(&direct_config("chat_completion"), &settings, reqwest::Client::new())
                .is_none()
        );
    }

    #[test]
    fn test_direct_mode_with_token() {
        let settings = Settings {
            api_token: Some("hf_abc".to_string()),
            remote_enabled: true,
        };
        let remote =
            build_remote(&direct_config("hosted_inference"), &settings, reqwest::Client::new())
                .unwrap();
        assert_eq!(remote.kind, RemoteKind::HostedInference);
        assert_eq!(remote.facts.name(), "mistralai/Mistral-7B-Instruct-v0.3");
    }

    #[test]
    fn test_chat_can_be_disabled() {
        let config = FileRemoteConfig {
            chat: false,
            ..Default::default()
        };
        let remote = build_remote(&config, &Settings::default(), reqwest::Client::new()).unwrap();
        assert!(remote.chat.is_none());
    }

    #[test]
    fn test_none_kind() {
        assert!(
            build_remote(&direct_config("none"), &Settings::default(), reqwest::Client::new())
                .is_none()
        );
    }
}
