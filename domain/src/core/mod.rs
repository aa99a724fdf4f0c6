//! Core domain concepts shared across all subdomains.
//!
//! - [`country::CountryQuery`]: a validated country name (display + lookup key)
//! - [`error::DomainError`]: domain-level errors

pub mod country;
pub mod error;
