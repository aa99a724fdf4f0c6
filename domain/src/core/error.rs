//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a country name")]
    InvalidCountry,

    #[error("Please enter a question")]
    InvalidQuestion,
}

impl DomainError {
    /// Check if this error was caused by empty user input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::InvalidCountry | DomainError::InvalidQuestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_country_display() {
        let error = DomainError::InvalidCountry;
        assert_eq!(error.to_string(), "Please enter a country name");
    }

    #[test]
    fn test_is_empty_input_check() {
        assert!(DomainError::InvalidCountry.is_empty_input());
        assert!(DomainError::InvalidQuestion.is_empty_input());
    }
}
