//! Common error types for groupie

use thiserror::Error;

/// Common result type for groupie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the groupie crates
///
/// An empty result set is never an error; it is an `Ok` with no artists.
#[derive(Error, Debug)]
pub enum Error {
    /// Network, status or decode failure on an upstream collection
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Invalid user input or request parameter (e.g. unparseable date)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Identifier present in one collection but absent from the artists
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a fetch error naming the collection that failed
    pub fn fetch(collection: &str, detail: impl std::fmt::Display) -> Self {
        Error::Fetch(format!("{}: {}", collection, detail))
    }
}
