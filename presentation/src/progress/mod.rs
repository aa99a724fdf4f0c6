//! Progress reporting for fact resolution

pub mod reporter;
