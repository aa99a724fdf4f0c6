//! Remote chat model port

use super::fact_source::SourceError;
use async_trait::async_trait;
use facts_domain::CountryQuery;

/// A model's reply to a follow-up question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub model_used: Option<String>,
}

impl ChatReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_used: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_used = Some(model.into());
        self
    }
}

/// Remote model answering questions about a country
#[async_trait]
pub trait RemoteChatModel: Send + Sync {
    /// Label used when the reply does not name its model
    fn name(&self) -> &str;

    /// Ask a question about `country`
    async fn ask(&self, country: &CountryQuery, question: &str) -> Result<ChatReply, SourceError>;
}
