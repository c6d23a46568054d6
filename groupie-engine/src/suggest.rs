//! Suggestion Index
//!
//! Autocomplete over artist/member names and over the city and country
//! halves of location slugs.

use crate::models::{split_slug, Artist, LocationRecord};

// ASCII hyphen separators
pub const ARTIST_TAG: &str = " - Artist(s)";
pub const MEMBER_TAG: &str = " - Member";

/// Tagged names matching `query`, in collection order
///
/// For each artist the artist name comes first, then its matching members.
/// Duplicates are kept.
pub fn by_name(artists: &[Artist], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let mut suggestions = Vec::new();

    for artist in artists {
        if artist.name.to_lowercase().contains(&query) {
            suggestions.push(format!("{}{}", artist.name, ARTIST_TAG));
        }
        for member in &artist.members {
            if member.to_lowercase().contains(&query) {
                suggestions.push(format!("{}{}", member, MEMBER_TAG));
            }
        }
    }
    suggestions
}

/// City and country names from slugs matching `query`
///
/// A slug matches when its spaced form contains the query. The city and the
/// country of a matching slug are each appended only if that exact string
/// is not already among the suggestions.
pub fn by_location(records: &[LocationRecord], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for record in records {
        for slug in &record.locations {
            if !slug.replace('_', " ").to_lowercase().contains(&query) {
                continue;
            }
            let Some((city, country)) = split_slug(slug) else {
                continue;
            };
            let add_city = !suggestions.contains(&city);
            let add_country = !suggestions.contains(&country);
            if add_city {
                suggestions.push(city);
            }
            if add_country {
                suggestions.push(country);
            }
        }
    }
    suggestions
}
