//! Relation Resolver
//!
//! Answers "did artist X play at location Y on date Z" from the relation
//! collection, the only collection that pairs a location with the dates
//! played there. Location and date records are not jointly indexed and
//! cannot answer it.

use crate::index::CorrelationIndex;
use crate::models::{Artist, ArtistId};
use groupie_common::Result;
use tracing::debug;

/// Which scan the resolver performs for a given input combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationPath {
    /// Search names a known artist, date given, no location
    ArtistOnDate(ArtistId),
    /// Search names a known artist, location given, no date
    ArtistAtLocation(ArtistId),
    /// Every other combination: scan all relation records
    General,
}

/// Choose the scan for these inputs
///
/// The search term resolves to an artist only on an exact name match.
pub fn plan(index: &CorrelationIndex, search: &str, date: &str, location: &str) -> RelationPath {
    let searched = if search.is_empty() {
        None
    } else {
        index.artist_id_by_name(search)
    };

    match (searched, date.is_empty(), location.is_empty()) {
        (Some(id), false, true) => RelationPath::ArtistOnDate(id),
        (Some(id), true, false) => RelationPath::ArtistAtLocation(id),
        _ => RelationPath::General,
    }
}

/// Resolve the joint search|date|location filter
///
/// `date` must already be normalized. Location keys are matched by
/// case-insensitive substring.
///
/// # Errors
/// `Error::NotFound` from artist resolution propagates; a partially
/// resolved result is never returned.
pub fn resolve(
    index: &CorrelationIndex,
    search: &str,
    date: &str,
    location: &str,
) -> Result<Vec<Artist>> {
    let path = plan(index, search, date, location);
    debug!(?path, search, date, location, "Resolving relation filter");

    let location = location.to_lowercase();
    let mut found = Vec::new();

    match path {
        RelationPath::ArtistOnDate(id) => {
            let played = index.lookup(id).relation.is_some_and(|r| {
                r.dates_locations
                    .values()
                    .any(|dates| dates.iter().any(|d| d == date))
            });
            if played {
                found.push(index.resolve_artist(id)?.clone());
            }
        }
        RelationPath::ArtistAtLocation(id) => {
            let played = index.lookup(id).relation.is_some_and(|r| {
                r.dates_locations
                    .keys()
                    .any(|slug| slug.to_lowercase().contains(&location))
            });
            if played {
                found.push(index.resolve_artist(id)?.clone());
            }
        }
        RelationPath::General => {
            for record in index.relation_records() {
                for (slug, dates) in &record.dates_locations {
                    if !slug.to_lowercase().contains(&location) {
                        continue;
                    }
                    if dates.iter().any(|d| d == date) {
                        found.push(index.resolve_artist(record.id)?.clone());
                    }
                }
            }
        }
    }

    Ok(found)
}
