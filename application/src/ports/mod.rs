//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_model;
pub mod country_catalog;
pub mod fact_source;
pub mod progress;
pub mod settings_store;
