//! Hosted inference endpoint adapter
//!
//! A bearer-token text-generation API (`POST {base}/models/{model}`). The
//! prompt asks for a JSON array of facts; the generated text is handed to the
//! shared normalizer, which locates the array inside it.

use super::{decode, send_request};
use async_trait::async_trait;
use facts_application::{ChatReply, FetchedFacts, RemoteChatModel, RemoteFactSource, SourceError};
use facts_domain::{CountryQuery, FactPromptTemplate, MAX_FACTS, RawResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
    Error { error: String },
}

/// Extract the generated text from an inference response body
fn parse_generated_text(body: &str) -> Result<String, SourceError> {
    match decode::<InferenceResponse>(body)? {
        InferenceResponse::Batch(generations) => generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| SourceError::MalformedBody("empty generation list".to_string())),
        InferenceResponse::Single(generation) => Ok(generation.generated_text),
        InferenceResponse::Error { error } => Err(SourceError::MalformedBody(error)),
    }
}

/// Adapter for a hosted text-generation endpoint
pub struct HostedInference {
    client: reqwest::Client,
    base_url: String,
    model: String,
    token: String,
    max_new_tokens: u32,
    temperature: f32,
}

impl HostedInference {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        token: impl Into<String>,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            token: token.into(),
            max_new_tokens,
            temperature,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, SourceError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        debug!("POST {}", url);
        let request = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest {
                inputs: prompt,
                parameters: InferenceParameters {
                    max_new_tokens: self.max_new_tokens,
                    temperature: self.temperature,
                    return_full_text: false,
                },
            });
        parse_generated_text(&send_request(request).await?)
    }
}

#[async_trait]
impl RemoteFactSource for HostedInference {
    fn name(&self) -> &str {
        &self.model
    }

    async fn fetch_facts(&self, country: &CountryQuery) -> Result<FetchedFacts, SourceError> {
        let prompt = FactPromptTemplate::facts_json(country.display(), MAX_FACTS);
        let text = self.generate(&prompt).await?;
        Ok(FetchedFacts::new(RawResponse::Text(text)).with_model(self.model.clone()))
    }
}

#[async_trait]
impl RemoteChatModel for HostedInference {
    fn name(&self) -> &str {
        &self.model
    }

    async fn ask(&self, country: &CountryQuery, question: &str) -> Result<ChatReply, SourceError> {
        let prompt = format!(
            "{}\n\n{}",
            FactPromptTemplate::chat_system(),
            FactPromptTemplate::chat_question(country.display(), question)
        );
        let text = self.generate(&prompt).await?;
        Ok(ChatReply::new(text).with_model(self.model.clone()))
    }
}
