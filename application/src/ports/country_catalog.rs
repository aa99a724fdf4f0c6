//! Country catalog port

use super::fact_source::SourceError;
use async_trait::async_trait;

/// Source of country names for suggestions
#[async_trait]
pub trait CountryCatalog: Send + Sync {
    /// Common names of all known countries, in any order
    async fn country_names(&self) -> Result<Vec<String>, SourceError>;
}

/// Catalog that knows no countries (suggestions disabled)
pub struct EmptyCatalog;

#[async_trait]
impl CountryCatalog for EmptyCatalog {
    async fn country_names(&self) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}
