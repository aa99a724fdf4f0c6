//! Prompt domain
//!
//! Prompts sent to remote models for fact generation and follow-up chat.

mod template;

pub use template::FactPromptTemplate;
