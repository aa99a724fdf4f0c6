//! Answer Question use case.
//!
//! Follow-up chat about the country on screen. Answers come from the local
//! [`KnowledgeTable`] unless a remote chat model is attached, in which case
//! the model is asked instead. A remote failure becomes the answer text; it
//! never disturbs the caller.

use crate::ports::chat_model::RemoteChatModel;
use crate::ports::fact_source::SourceError;
use facts_domain::{ChatExchange, CountryQuery, DomainError, KnowledgeTable, LOCAL_SOURCE_LABEL};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the answerer (only invalid input)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Use case for answering a question about a country.
#[derive(Clone, Default)]
pub struct AnswerQuestionUseCase {
    knowledge: KnowledgeTable,
    remote: Option<Arc<dyn RemoteChatModel>>,
}

impl AnswerQuestionUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with a remote model instead of the local table.
    pub fn with_remote(mut self, remote: Arc<dyn RemoteChatModel>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Answer `question` about `country`.
    pub async fn execute(&self, country: &str, question: &str) -> Result<ChatExchange, AnswerError> {
        let country = CountryQuery::parse(country)?;
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::InvalidQuestion.into());
        }

        let Some(remote) = &self.remote else {
            let answer = self.knowledge.answer(&country, question);
            debug!(country = country.display(), answer_len = answer.len(), "Answered locally");
            return Ok(ChatExchange::new(question, answer, LOCAL_SOURCE_LABEL));
        };

        let reply = remote.ask(&country, question).await.and_then(|reply| {
            let text = reply.text.trim().to_string();
            if text.is_empty() {
                Err(SourceError::MalformedBody("empty answer".to_string()))
            } else {
                Ok((text, reply.model_used))
            }
        });

        Ok(match reply {
            Ok((text, model)) => {
                let label = model
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| remote.name().to_string());
                ChatExchange::new(question, text, label)
            }
            Err(e) => {
                warn!("Remote chat failed for {}: {}", country, e);
                ChatExchange::new(question, e.user_message(), remote.name())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_model::ChatReply;
    use async_trait::async_trait;

    struct MockChat {
        result: Result<ChatReply, SourceError>,
    }

    #[async_trait]
    impl RemoteChatModel for MockChat {
        fn name(&self) -> &str {
            "mock-chat"
        }

        async fn ask(&self, _country: &CountryQuery, _question: &str) -> Result<ChatReply, SourceError> {
            self.result.clone()
        }
    }

    fn remote(result: Result<ChatReply, SourceError>) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new().with_remote(Arc::new(MockChat { result }))
    }

    #[tokio::test]
    async fn local_capital_of_france() {
        let exchange = AnswerQuestionUseCase::new()
            .execute("France", "what is the capital")
            .await
            .unwrap();
        assert!(exchange.answer.contains("Paris"));
        assert_eq!(exchange.source_label, LOCAL_SOURCE_LABEL);
        assert_eq!(exchange.question, "what is the capital");
    }

    #[tokio::test]
    async fn local_unknown_topic_still_answers() {
        let exchange = AnswerQuestionUseCase::new()
            .execute("Wakanda", "Is vibranium real?")
            .await
            .unwrap();
        assert!(exchange.answer.contains("Wakanda"));
    }

    #[tokio::test]
    async fn remote_answer_is_trimmed() {
        let uc = remote(Ok(ChatReply::new("  Paris, on the Seine.\n").with_model("DeepSeek-R1")));
        let exchange = uc.execute("France", "Capital?").await.unwrap();
        assert_eq!(exchange.answer, "Paris, on the Seine.");
        assert_eq!(exchange.source_label, "DeepSeek-R1");
    }

    #[tokio::test]
    async fn remote_failure_becomes_message() {
        let uc = remote(Err(SourceError::RateLimited));
        let exchange = uc.execute("France", "Capital?").await.unwrap();
        assert_eq!(exchange.answer, SourceError::RateLimited.user_message());
        assert_eq!(exchange.source_label, "mock-chat");
    }

    #[tokio::test]
    async fn remote_empty_reply_is_a_failure() {
        let uc = remote(Ok(ChatReply::new("   ")));
        let exchange = uc.execute("France", "Capital?").await.unwrap();
        assert!(exchange.answer.contains("could not get an answer"));
    }

    #[tokio::test]
    async fn local_answer_with_multibyte_country() {
        let exchange = AnswerQuestionUseCase::new()
            .execute("Côte d'Ivoire", "What languages do people speak?")
            .await
            .unwrap();
        assert!(!exchange.answer.is_empty());
        assert!(exchange.answer.contains("Côte d'Ivoire"));
    }

    #[tokio::test]
    async fn empty_question_rejected() {
        let result = AnswerQuestionUseCase::new().execute("France", "  ").await;
        assert_eq!(result, Err(AnswerError::InvalidInput(DomainError::InvalidQuestion)));
    }
}
