//! Suggest Countries use case.
//!
//! Loads the country name list once and keeps it in memory; failures degrade
//! to an empty list.

use crate::ports::country_catalog::CountryCatalog;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Use case for prefix-based country suggestions.
pub struct SuggestCountriesUseCase {
    catalog: Arc<dyn CountryCatalog>,
    names: OnceCell<Vec<String>>,
}

impl SuggestCountriesUseCase {
    pub fn new(catalog: Arc<dyn CountryCatalog>) -> Self {
        Self {
            catalog,
            names: OnceCell::new(),
        }
    }

    /// The in-memory name list, fetched on first use.
    pub async fn names(&self) -> &[String] {
        self.names
            .get_or_init(|| async {
                match self.catalog.country_names().await {
                    Ok(mut names) => {
                        names.retain(|n| !n.trim().is_empty());
                        names.sort_by_key(|n| n.to_lowercase());
                        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
                        debug!("Loaded {} country names", names.len());
                        names
                    }
                    Err(e) => {
                        debug!("Country list unavailable: {}", e);
                        Vec::new()
                    }
                }
            })
            .await
    }

    /// Up to `limit` names: prefix matches first, then substring matches.
    pub async fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let names = self.names().await;
        let (prefix, contains): (Vec<&String>, Vec<&String>) = names
            .iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .partition(|n| n.to_lowercase().starts_with(&needle));

        prefix
            .into_iter()
            .chain(contains)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fact_source::SourceError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockCatalog {
        result: Result<Vec<String>, SourceError>,
        calls: AtomicUsize,
    }

    impl MockCatalog {
        fn new(result: Result<Vec<String>, SourceError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CountryCatalog for MockCatalog {
        async fn country_names(&self) -> Result<Vec<String>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn names(list: &[&str]) -> Result<Vec<String>, SourceError> {
        Ok(list.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn prefix_matches_come_first() {
        let catalog = MockCatalog::new(names(&["Niger", "Nigeria", "Algeria", "Norway"]));
        let uc = SuggestCountriesUseCase::new(catalog);
        assert_eq!(uc.suggest("nig", 5).await, vec!["Niger", "Nigeria"]);
        assert_eq!(uc.suggest("ger", 5).await, vec!["Algeria", "Niger", "Nigeria"]);
    }

    #[tokio::test]
    async fn list_is_fetched_once() {
        let catalog = MockCatalog::new(names(&["Chile", "China"]));
        let uc = SuggestCountriesUseCase::new(catalog.clone());
        uc.suggest("ch", 5).await;
        uc.suggest("chi", 1).await;
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
        assert_eq!(uc.suggest("chi", 1).await.len(), 1);
    }

    #[tokio::test]
    async fn failure_degrades_to_empty() {
        let catalog = MockCatalog::new(Err(SourceError::Network("offline".to_string())));
        let uc = SuggestCountriesUseCase::new(catalog);
        assert!(uc.suggest("fr", 5).await.is_empty());
        assert!(uc.names().await.is_empty());
    }

    #[tokio::test]
    async fn empty_input_suggests_nothing() {
        let uc = SuggestCountriesUseCase::new(MockCatalog::new(names(&["Peru"])));
        assert!(uc.suggest("  ", 5).await.is_empty());
    }

    #[tokio::test]
    async fn duplicates_removed_and_sorted() {
        let uc = SuggestCountriesUseCase::new(MockCatalog::new(names(&["peru", "Peru", "Chad", ""])));
        assert_eq!(uc.names().await.len(), 2);
        assert_eq!(uc.names().await[0], "Chad");
    }
}
