//! Filter Evaluator
//!
//! One predicate per criterion. Each returns a new vector preserving the
//! relative order of its input and never mutates the input. Text matching
//! is case-insensitive substring containment throughout.

use crate::index::CorrelationIndex;
use crate::models::{confirmed_date, Artist, ArtistId, DateRecord, LocationRecord};
use groupie_common::Result;
use std::collections::HashSet;

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Artists whose name, or any one member's name, contains `term`
///
/// An empty term returns the input unchanged.
pub fn by_text(artists: &[Artist], term: &str) -> Vec<Artist> {
    if term.is_empty() {
        return artists.to_vec();
    }
    let term = term.to_lowercase();

    artists
        .iter()
        .filter(|a| {
            contains_folded(&a.name, &term) || a.members.iter().any(|m| contains_folded(m, &term))
        })
        .cloned()
        .collect()
}

/// Artists formed in `year`
pub fn by_creation_year(artists: &[Artist], year: i32) -> Vec<Artist> {
    artists
        .iter()
        .filter(|a| a.creation_date == year)
        .cloned()
        .collect()
}

/// Artists with exactly `count` members
pub fn by_member_count(artists: &[Artist], count: usize) -> Vec<Artist> {
    artists
        .iter()
        .filter(|a| a.members.len() == count)
        .cloned()
        .collect()
}

/// Artists whose first album date equals `date`
///
/// `date` must already be normalized to `DD-MM-YYYY`
/// (see [`crate::dates::normalize_date`]).
pub fn by_first_album(artists: &[Artist], date: &str) -> Vec<Artist> {
    artists
        .iter()
        .filter(|a| a.first_album == date)
        .cloned()
        .collect()
}

/// Artists with a tour date equal to `date`
///
/// Scans every date entry of every record, ignoring the unconfirmed marker.
/// An artist is collected once per matching entry. An empty `date` yields
/// an empty result.
///
/// # Errors
/// `Error::NotFound` when a matching record's id has no artist.
pub fn by_date(
    index: &CorrelationIndex,
    records: &[DateRecord],
    date: &str,
) -> Result<Vec<Artist>> {
    if date.is_empty() {
        return Ok(Vec::new());
    }
    let target = date.to_lowercase();

    let mut found = Vec::new();
    for record in records {
        for entry in &record.dates {
            if confirmed_date(entry).to_lowercase() == target {
                found.push(index.resolve_artist(record.id)?.clone());
            }
        }
    }
    Ok(found)
}

/// Split a location slug into lowercase word tokens on `_` and `-`
pub fn slug_words(slug: &str) -> Vec<String> {
    slug.to_lowercase()
        .split(|c| c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Artists that toured a location matching `query`
///
/// `query` is split on whitespace, `_` and `-` like the slugs themselves, so
/// `new york`, `new_york` and `new-york` are equivalent. A record matches when
/// any search word is a substring of any word token of any of its slugs. Each artist is
/// collected at most once. An empty query yields an empty result.
///
/// # Errors
/// `Error::NotFound` when a matching record's id has no artist.
pub fn by_location(
    index: &CorrelationIndex,
    records: &[LocationRecord],
    query: &str,
) -> Result<Vec<Artist>> {
    let query = query.to_lowercase();
    let search_words: Vec<&str> = query
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    if search_words.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<ArtistId> = HashSet::new();
    let mut found = Vec::new();
    for record in records {
        if seen.contains(&record.id) {
            continue;
        }
        let matched = record.locations.iter().any(|slug| {
            let words = slug_words(slug);
            search_words
                .iter()
                .any(|needle| words.iter().any(|w| w.contains(needle)))
        });
        if matched {
            found.push(index.resolve_artist(record.id)?.clone());
            seen.insert(record.id);
        }
    }
    Ok(found)
}
