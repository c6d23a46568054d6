//! HTTP API handlers for groupie-server

pub mod artists;
pub mod health;
pub mod search;
pub mod suggest;

pub use artists::artist_detail;
pub use health::health_routes;
pub use search::search;
pub use suggest::{suggest_locations, suggest_names};
