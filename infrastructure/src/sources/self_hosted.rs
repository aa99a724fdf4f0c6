//! Self-hosted backend adapter
//!
//! Talks to a local generation server:
//!
//! - `POST /generate-facts {country}` → `{facts: [{title, content}], model_used}`
//! - `POST /chat {country, question}` → `{response, model_used}`
//! - `GET /health` → `{status, model, model_status}`

use super::{decode, send_request};
use async_trait::async_trait;
use facts_application::{ChatReply, FetchedFacts, RemoteChatModel, RemoteFactSource, SourceError};
use facts_domain::{CountryQuery, RawFact, RawResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_NAME: &str = "Self-hosted model";

#[derive(Debug, Serialize)]
struct GenerateFactsRequest<'a> {
    country: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateFactsResponse {
    #[serde(default)]
    facts: Vec<RawFact>,
    #[serde(default)]
    model_used: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    country: &'a str,
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    model_used: Option<String>,
}

/// Result of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub model_status: Option<String>,
}

impl HealthStatus {
    /// Server is up and its model is loaded
    pub fn is_ready(&self) -> bool {
        self.status == "running" && self.model_status.as_deref() != Some("unavailable")
    }
}

/// Adapter for a self-hosted generation backend
pub struct SelfHostedBackend {
    client: reqwest::Client,
    base_url: String,
}

impl SelfHostedBackend {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the backend's health endpoint
    pub async fn health(&self) -> Result<HealthStatus, SourceError> {
        let body = send_request(self.client.get(format!("{}/health", self.base_url))).await?;
        decode(&body)
    }
}

/// Turn a `/generate-facts` body into a structured payload
fn parse_generate_facts(body: &str) -> Result<FetchedFacts, SourceError> {
    let parsed: GenerateFactsResponse = decode(body)?;
    if parsed.facts.is_empty()
        && let Some(error) = parsed.error
    {
        return Err(SourceError::MalformedBody(error));
    }

    let fetched = FetchedFacts::new(RawResponse::Structured(parsed.facts));
    Ok(match parsed.model_used {
        Some(model) => fetched.with_model(model),
        None => fetched,
    })
}

fn parse_chat(body: &str) -> Result<ChatReply, SourceError> {
    let parsed: ChatResponse = decode(body)?;
    let reply = ChatReply::new(parsed.response);
    Ok(match parsed.model_used {
        Some(model) => reply.with_model(model),
        None => reply,
    })
}

#[async_trait]
impl RemoteFactSource for SelfHostedBackend {
    fn name(&self) -> &str {
        DEFAULT_NAME
    }

    async fn fetch_facts(&self, country: &CountryQuery) -> Result<FetchedFacts, SourceError> {
        debug!("POST {}/generate-facts for {}", self.base_url, country);
        let request = self
            .client
            .post(format!("{}/generate-facts", self.base_url))
            .json(&GenerateFactsRequest {
                country: country.display(),
            });
        parse_generate_facts(&send_request(request).await?)
    }
}

#[async_trait]
impl RemoteChatModel for SelfHostedBackend {
    fn name(&self) -> &str {
        DEFAULT_NAME
    }

    async fn ask(&self, country: &CountryQuery, question: &str) -> Result<ChatReply, SourceError> {
        debug!("POST {}/chat for {}", self.base_url, country);
        let request = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&ChatRequest {
                country: country.display(),
                question,
            });
        parse_chat(&send_request(request).await?)
    }
}
