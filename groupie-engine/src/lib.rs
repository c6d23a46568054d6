//! groupie-engine - cross-dataset query engine
//!
//! Correlates four independently served collections (artists, locations,
//! dates, relations) by their shared integer identifier and evaluates the
//! artist search filters against that correlated view.
//!
//! ## Modules
//! - **`models`**: Upstream record shapes
//! - **`source`**: Data Source Client trait with HTTP and in-memory implementations
//! - **`index`**: Per-request Correlation Index (id -> record maps)
//! - **`filters`**: Independent predicates, one per criterion
//! - **`relation`**: Joint search|date|location resolver over relation records
//! - **`combinator`**: Selection precedence, narrowing filters and ordering
//! - **`suggest`**: Autocomplete over names and location tokens
//! - **`dates`**: Date input normalization
//! - **`engine`**: `QueryEngine` facade wiring the above per request

pub mod combinator;
pub mod dates;
pub mod engine;
pub mod filters;
pub mod index;
pub mod models;
pub mod relation;
pub mod source;
pub mod suggest;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use engine::{ArtistDetail, FilterQuery, QueryEngine};
pub use index::CorrelationIndex;
pub use models::{Artist, ArtistId, Catalog, DateRecord, LocationRecord, RelationRecord};
pub use source::{DataSource, HttpDataSource, InMemorySource};
