//! Curated fact table
//!
//! Hand-authored facts for a fixed set of countries. A hit here short-circuits
//! the whole fallback chain.

mod table;

pub use table::CuratedTable;
