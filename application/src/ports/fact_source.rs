//! Remote fact source port
//!
//! Defines the interface for network-backed fact generators. Each adapter only
//! fetches; turning the payload into facts is shared work done by
//! [`facts_domain::fact::normalize`].

use async_trait::async_trait;
use facts_domain::{CountryQuery, RawResponse};
use thiserror::Error;

/// Errors that can occur while talking to a remote source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized (HTTP 401)")]
    Unauthorized,

    #[error("Forbidden (HTTP 403)")]
    Forbidden,

    #[error("Rate limited (HTTP 429)")]
    RateLimited,

    #[error("Service unavailable (HTTP 503)")]
    ServiceUnavailable,

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedBody(String),
}

impl SourceError {
    /// Map a non-success HTTP status code
    pub fn from_status(code: u16) -> Self {
        match code {
            401 => SourceError::Unauthorized,
            403 => SourceError::Forbidden,
            429 => SourceError::RateLimited,
            503 => SourceError::ServiceUnavailable,
            other => SourceError::HttpStatus(other),
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            SourceError::Unauthorized => {
                "Your API token was rejected. Check the token in your settings."
            }
            SourceError::Forbidden => "Access to this model was denied for your token.",
            SourceError::RateLimited => {
                "Too many requests right now. Please wait a moment and try again."
            }
            SourceError::ServiceUnavailable => {
                "The model service is temporarily unavailable. Please try again shortly."
            }
            SourceError::Network(_)
            | SourceError::HttpStatus(_)
            | SourceError::MalformedBody(_) => {
                "Sorry, I could not get an answer right now. Please try again."
            }
        }
    }
}

/// Payload fetched from a remote source, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFacts {
    pub raw: RawResponse,
    /// Model named by the response, if any
    pub model_used: Option<String>,
}

impl FetchedFacts {
    pub fn new(raw: RawResponse) -> Self {
        Self {
            raw,
            model_used: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_used = Some(model.into());
        self
    }
}

/// Network-backed generator of facts
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait RemoteFactSource: Send + Sync {
    /// Label used when the response does not name its model
    fn name(&self) -> &str;

    /// Request facts about a country
    async fn fetch_facts(&self, country: &CountryQuery) -> Result<FetchedFacts, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(SourceError::from_status(401), SourceError::Unauthorized);
        assert_eq!(SourceError::from_status(403), SourceError::Forbidden);
        assert_eq!(SourceError::from_status(429), SourceError::RateLimited);
        assert_eq!(SourceError::from_status(503), SourceError::ServiceUnavailable);
        assert_eq!(SourceError::from_status(500), SourceError::HttpStatus(500));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let messages = [
            SourceError::Unauthorized.user_message(),
            SourceError::Forbidden.user_message(),
            SourceError::RateLimited.user_message(),
            SourceError::ServiceUnavailable.user_message(),
            SourceError::HttpStatus(500).user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(
            SourceError::Network("refused".into()).user_message(),
            SourceError::HttpStatus(502).user_message()
        );
    }
}
