//! Domain layer for country-facts
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fact Records
//!
//! Every source produces a batch of [`FactRecord`]s, a title/content pair
//! rendered as one card. A [`FactBatch`] also records its [`FactSource`].
//!
//! ## Sources
//!
//! - **Curated**: [`CuratedTable`], hand-authored facts for a few countries
//! - **Remote**: model output, funnelled through [`fact::normalize`]
//! - **Template**: [`TemplateSynthesizer`], the guaranteed fallback

pub mod chat;
pub mod config;
pub mod core;
pub mod curated;
pub mod fact;
pub mod prompt;
pub mod settings;
pub mod synth;

// Re-export commonly used types
pub use chat::{ChatExchange, KnowledgeTable, LOCAL_SOURCE_LABEL, QuestionTopic};
pub use config::{ConfigIssue, OutputFormat, Severity};
pub use core::{country::CountryQuery, error::DomainError};
pub use curated::CuratedTable;
pub use fact::{
    FactBatch, FactRecord, FactSource, MAX_FACTS, MIN_FACTS, NormalizeError, RawFact, RawResponse,
};
pub use prompt::FactPromptTemplate;
pub use settings::Settings;
pub use synth::TemplateSynthesizer;
