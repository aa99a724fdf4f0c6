//! Application layer for country-facts
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ResolverConfig, SourceStep};
pub use ports::{
    chat_model::{ChatReply, RemoteChatModel},
    country_catalog::{CountryCatalog, EmptyCatalog},
    fact_source::{FetchedFacts, RemoteFactSource, SourceError},
    progress::{NoProgress, ResolveProgressNotifier},
    settings_store::{SettingsError, SettingsStore, load_or_default},
};
pub use session::FactSession;
pub use use_cases::answer_question::{AnswerError, AnswerQuestionUseCase};
pub use use_cases::resolve_facts::{ResolveError, ResolveFactsUseCase};
pub use use_cases::suggest_countries::SuggestCountriesUseCase;
