//! Country query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A country name entered by the user (Value Object)
///
/// Keeps the trimmed input for display and a lowercase key for table lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryQuery {
    display: String,
    key: String,
}

impl CountryQuery {
    /// Try to create a query from free text, rejecting empty input
    pub fn parse(input: impl AsRef<str>) -> Result<Self, DomainError> {
        let display = input.as_ref().trim();
        if display.is_empty() {
            return Err(DomainError::InvalidCountry);
        }
        Ok(Self {
            display: display.to_string(),
            key: display.to_lowercase(),
        })
    }

    /// Name as the user typed it (trimmed)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lowercase lookup key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for CountryQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl std::str::FromStr for CountryQuery {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_preserves_casing() {
        let q = CountryQuery::parse("  New Zealand ").unwrap();
        assert_eq!(q.display(), "New Zealand");
        assert_eq!(q.key(), "new zealand");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(CountryQuery::parse(""), Err(DomainError::InvalidCountry));
        assert_eq!(CountryQuery::parse("   \t"), Err(DomainError::InvalidCountry));
    }

    #[test]
    fn test_from_str() {
        let q: CountryQuery = "JAPAN".parse().unwrap();
        assert_eq!(q.key(), "japan");
        assert_eq!(q.to_string(), "JAPAN");
    }
}
