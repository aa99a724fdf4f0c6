//! Chat-completion endpoint adapter
//!
//! OpenAI-compatible `POST {base}/v1/chat/completions`. Fact replies are
//! prose, so the normalizer falls back to sentence splitting.

use super::{decode, send_request};
use async_trait::async_trait;
use facts_application::{ChatReply, FetchedFacts, RemoteChatModel, RemoteFactSource, SourceError};
use facts_domain::{CountryQuery, FactPromptTemplate, MIN_FACTS, RawResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// First choice's content plus the model that produced it
fn parse_completion(body: &str) -> Result<(String, Option<String>), SourceError> {
    let parsed: CompletionResponse = decode(body)?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| SourceError::MalformedBody("no choices in completion".to_string()))?;
    Ok((content, parsed.model))
}

/// Adapter for a chat-completion endpoint
pub struct ChatCompletion {
    client: reqwest::Client,
    base_url: String,
    model: String,
    token: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatCompletion {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        token: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            token: token.into(),
            max_tokens,
            temperature,
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<(String, String), SourceError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!("POST {} (model {})", url, self.model);
        let request = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&CompletionRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: system,
                    },
                    ChatMessage {
                        role: "user",
                        content: user,
                    },
                ],
                max_tokens: self.max_tokens,
                temperature: self.temperature,
            });
        let (content, model) = parse_completion(&send_request(request).await?)?;
        Ok((content, model.unwrap_or_else(|| self.model.clone())))
    }
}

#[async_trait]
impl RemoteFactSource for ChatCompletion {
    fn name(&self) -> &str {
        &self.model
    }

    async fn fetch_facts(&self, country: &CountryQuery) -> Result<FetchedFacts, SourceError> {
        let (text, model) = self
            .complete(
                FactPromptTemplate::facts_system(),
                &FactPromptTemplate::facts_prose(country.display(), MIN_FACTS),
            )
            .await?;
        Ok(FetchedFacts::new(RawResponse::Text(text)).with_model(model))
    }
}

#[async_trait]
impl RemoteChatModel for ChatCompletion {
    fn name(&self) -> &str {
        &self.model
    }

    async fn ask(&self, country: &CountryQuery, question: &str) -> Result<ChatReply, SourceError> {
        let (text, model) = self
            .complete(
                FactPromptTemplate::chat_system(),
                &FactPromptTemplate::chat_question(country.display(), question),
            )
            .await?;
        Ok(ChatReply::new(text).with_model(model))
    }
}
