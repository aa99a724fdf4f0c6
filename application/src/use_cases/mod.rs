//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod resolve_facts;
pub mod suggest_countries;
