//! Country catalog adapters

mod rest_countries;

pub use rest_countries::RestCountriesCatalog;
