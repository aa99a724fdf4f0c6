//! REST country list used for autocomplete suggestions

use crate::sources::{decode, send_request};
use async_trait::async_trait;
use facts_application::{CountryCatalog, SourceError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CountryEntry {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Extract `name.common` from every entry, sorted and deduplicated
fn parse_country_names(body: &str) -> Result<Vec<String>, SourceError> {
    let entries: Vec<CountryEntry> = decode(body)?;
    let mut names: Vec<String> = entries
        .into_iter()
        .map(|e| e.name.common.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}

/// Catalog backed by a restcountries-style endpoint
pub struct RestCountriesCatalog {
    client: reqwest::Client,
    url: String,
}

impl RestCountriesCatalog {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CountryCatalog for RestCountriesCatalog {
    async fn country_names(&self) -> Result<Vec<String>, SourceError> {
        debug!("Fetching country list from {}", self.url);
        let body = send_request(self.client.get(&self.url)).await?;
        let names = parse_country_names(&body)?;
        debug!("Loaded {} country names", names.len());
        Ok(names)
    }
}
