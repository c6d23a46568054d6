//! # Groupie Common Library
//!
//! Shared code for the groupie crates:
//! - Error taxonomy used by the query engine and the HTTP surface
//! - Bootstrap configuration loading (TOML + environment + CLI overrides)

pub mod config;
pub mod error;

pub use error::{Error, Result};
