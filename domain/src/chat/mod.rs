//! Chat domain
//!
//! Follow-up questions about the country on screen, answered either from the
//! built-in [`KnowledgeTable`] or by a remote model.

pub mod entities;
pub mod knowledge;

pub use entities::ChatExchange;
pub use knowledge::{KnowledgeTable, QuestionTopic, LOCAL_SOURCE_LABEL};
