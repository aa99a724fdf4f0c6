//! Configuration file loading for country-facts
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `COUNTRY_FACTS_` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./country-facts.toml` or `./.country-facts.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/country-facts/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileCatalogConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileRemoteConfig,
    FileReplConfig, FileResolverConfig,
};
pub use loader::ConfigLoader;
pub(crate) use loader::APP_DIR;
