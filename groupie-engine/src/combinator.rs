//! Combinator: selection precedence, narrowing and ordering
//!
//! The three primary criteria (text, date, location) do not combine as a
//! conjunction. Exactly one source feeds the result, chosen by
//! [`Selection::for_criteria`]:
//!
//! | text | date | location | source |
//! |------|------|----------|--------|
//! | set  | -    | -        | `by_text` |
//! | -    | -    | set      | `by_location` |
//! | -    | set  | -        | `by_date` |
//! | -    | -    | -        | every artist |
//! | any other combination | | | relation resolver |
//!
//! Narrowing (year, member count, first album) then applies to whichever
//! source fired, followed by at most one effective ordering.

use crate::filters;
use crate::index::CorrelationIndex;
use crate::models::{confirmed_date, Artist, ArtistId, DateRecord};
use crate::relation;
use groupie_common::Result;
use std::collections::HashMap;
use tracing::debug;

/// Normalized criteria for one query
///
/// Empty strings mean "not set"; dates are already `DD-MM-YYYY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub date: String,
    pub location: String,
    pub year: Option<i32>,
    pub members: Option<usize>,
    pub first_album: Option<String>,
    pub alphabetical: bool,
    pub recent_concerts: bool,
}

/// Source of the selected result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Text,
    Location,
    Date,
    All,
    Relation,
}

impl Selection {
    pub fn for_criteria(criteria: &Criteria) -> Self {
        let text = !criteria.search.is_empty();
        let date = !criteria.date.is_empty();
        let location = !criteria.location.is_empty();

        match (text, date, location) {
            (true, false, false) => Selection::Text,
            (false, false, true) => Selection::Location,
            (false, true, false) => Selection::Date,
            (false, false, false) => Selection::All,
            _ => Selection::Relation,
        }
    }
}

/// Pick the result set according to the precedence table
pub fn select(index: &CorrelationIndex, criteria: &Criteria) -> Result<Vec<Artist>> {
    let selection = Selection::for_criteria(criteria);
    debug!(?selection, "Selecting result set");

    match selection {
        Selection::Text => Ok(filters::by_text(index.artists(), &criteria.search)),
        Selection::Location => {
            filters::by_location(index, index.location_records(), &criteria.location)
        }
        Selection::Date => filters::by_date(index, index.date_records(), &criteria.date),
        Selection::All => Ok(index.artists().to_vec()),
        Selection::Relation => relation::resolve(
            index,
            &criteria.search,
            &criteria.date,
            &criteria.location,
        ),
    }
}

/// Apply year, member-count and first-album filters, in that order
pub fn narrow(artists: Vec<Artist>, criteria: &Criteria) -> Vec<Artist> {
    let mut artists = artists;
    if let Some(year) = criteria.year {
        artists = filters::by_creation_year(&artists, year);
    }
    if let Some(members) = criteria.members {
        artists = filters::by_member_count(&artists, members);
    }
    if let Some(date) = &criteria.first_album {
        artists = filters::by_first_album(&artists, date);
    }
    artists
}

/// Lexically greatest confirmed date per artist id
///
/// Dates are compared as plain strings, not as calendar dates. Records
/// without dates contribute nothing.
pub fn latest_dates(records: &[DateRecord]) -> HashMap<ArtistId, &str> {
    let mut latest: HashMap<ArtistId, &str> = HashMap::new();
    for record in records {
        let Some(max) = record.dates.iter().map(|d| confirmed_date(d)).max() else {
            continue;
        };
        latest
            .entry(record.id)
            .and_modify(|current| {
                if max > *current {
                    *current = max;
                }
            })
            .or_insert(max);
    }
    latest
}

/// Apply the requested ordering
///
/// Alphabetical is a stable, case-sensitive sort on the raw name. Recency
/// sorts by [`latest_dates`] descending, artists without dates last, and
/// marks every artist with `show_concert`. When both are requested recency
/// runs last and wins, leaving alphabetical order only among ties.
///
/// Only the selected and narrowed artists are reordered. Recency never adds
/// artists the filters excluded, and never drops artists that lack a date
/// record.
pub fn order(artists: Vec<Artist>, index: &CorrelationIndex, criteria: &Criteria) -> Vec<Artist> {
    let mut artists = artists;

    if criteria.alphabetical {
        artists.sort_by(|a, b| a.name.cmp(&b.name));
    }

    if criteria.recent_concerts {
        let latest = latest_dates(index.date_records());
        artists.sort_by(|a, b| latest.get(&b.id).cmp(&latest.get(&a.id)));
        for artist in &mut artists {
            artist.show_concert = true;
        }
    }

    artists
}

/// Select, narrow and order
pub fn run(index: &CorrelationIndex, criteria: &Criteria) -> Result<Vec<Artist>> {
    let selected = select(index, criteria)?;
    let narrowed = narrow(selected, criteria);
    Ok(order(narrowed, index, criteria))
}
