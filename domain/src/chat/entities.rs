//! Chat entities

use serde::{Deserialize, Serialize};

/// One question/answer pair; rendered once and discarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
    /// Where the answer came from ("Local Knowledge" or a model name)
    pub source_label: String,
}

impl ChatExchange {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            source_label: source_label.into(),
        }
    }
}
