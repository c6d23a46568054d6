//! Upstream record shapes
//!
//! The four collections share an identifier space by convention only.
//! Nothing here assumes two collections have the same length or that
//! record `n` of one lines up with record `n` of another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared identifier across the four collections
pub type ArtistId = u32;

/// Artist (band or solo act)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub creation_date: i32,
    /// First album release date, `DD-MM-YYYY`
    #[serde(default)]
    pub first_album: String,
    /// Upstream URLs of this artist's per-collection records (display only)
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
    /// Set on every returned artist when the recency ordering was requested.
    /// Never read from upstream.
    #[serde(default, skip_deserializing)]
    pub show_concert: bool,
}

/// Locations an artist toured, as `city_name-country_name` slugs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Free-form upstream link, display only
    #[serde(default)]
    pub dates: String,
}

/// Tour dates of an artist; a leading `*` marks an unconfirmed date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Authoritative location -> dates pairing for an artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Top-level index document listing the collection URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub artists: String,
    pub locations: String,
    pub dates: String,
    pub relation: String,
}

/// `{"index": [...]}` wrapper used by the locations, dates and relation
/// collections
#[derive(Debug, Clone, Deserialize)]
pub struct IndexEnvelope<T> {
    pub index: Vec<T>,
}

/// The four collections fetched for one request
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationRecord>,
    pub dates: Vec<DateRecord>,
    pub relations: Vec<RelationRecord>,
}

/// Strip the single leading `*` that marks an unconfirmed date
pub fn confirmed_date(raw: &str) -> &str {
    raw.strip_prefix('*').unwrap_or(raw)
}

/// Split a location slug into `(city, country)` with underscores read as
/// spaces. Slugs without a `-` separator yield `None`; segments after the
/// second are ignored.
pub fn split_slug(slug: &str) -> Option<(String, String)> {
    let mut parts = slug.split('-');
    let city = parts.next()?;
    let country = parts.next()?;
    Some((city.replace('_', " "), country.replace('_', " ")))
}
