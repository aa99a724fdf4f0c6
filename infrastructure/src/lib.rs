//! Infrastructure layer for country-facts
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod settings;
pub mod sources;

// Re-export commonly used types
pub use catalog::RestCountriesCatalog;
pub use config::{
    ConfigLoader, FileCatalogConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRemoteConfig, FileReplConfig, FileResolverConfig,
};
pub use settings::JsonSettingsStore;
pub use sources::{
    ChatCompletion, HealthStatus, HostedInference, RemoteAdapters, RemoteKind, SelfHostedBackend,
    build_remote,
};
