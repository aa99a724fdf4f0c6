//! Settings store port

use facts_domain::Settings;
use thiserror::Error;
use tracing::warn;

/// Errors from reading or writing persisted settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid: {0}")]
    Format(String),

    #[error("No settings location available")]
    NoLocation,
}

/// Key-value persistence for [`Settings`]
pub trait SettingsStore: Send + Sync {
    /// Read settings; a missing store yields defaults
    fn load(&self) -> Result<Settings, SettingsError>;

    /// Persist settings (explicit save)
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Remove persisted settings
    fn clear(&self) -> Result<(), SettingsError>;
}

/// Settings from `store`, or defaults when there is no store or it cannot
/// be read. Startup never fails on settings.
pub fn load_or_default(store: Option<&dyn SettingsStore>) -> Settings {
    let Some(store) = store else {
        warn!("No settings location available; using default settings");
        return Settings::default();
    };
    store.load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable settings: {}", e);
        Settings::default()
    })
}
