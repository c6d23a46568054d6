//! Date input normalization
//!
//! Upstream dates are `DD-MM-YYYY` strings and every comparison in the
//! engine is a plain string comparison against that form. Browser date
//! inputs submit `YYYY-MM-DD`, so user input is validated as a calendar date
//! and rewritten before it reaches any filter.

use chrono::NaiveDate;
use groupie_common::{Error, Result};

/// Upstream date layout
pub const UPSTREAM_FORMAT: &str = "%d-%m-%Y";

/// Form input date layout
pub const FORM_FORMAT: &str = "%Y-%m-%d";

/// Normalize a user-supplied date to `DD-MM-YYYY`
///
/// Accepts `YYYY-MM-DD` or an already normalized `DD-MM-YYYY`.
///
/// # Errors
/// `Error::InvalidInput` when the value is not a real calendar date in
/// either layout.
pub fn normalize_date(input: &str) -> Result<String> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, FORM_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, UPSTREAM_FORMAT))
        .map(|date| date.format(UPSTREAM_FORMAT).to_string())
        .map_err(|_| Error::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", input)))
}

/// Normalize an optional date; blank input means "no date"
pub fn normalize_optional(input: Option<&str>) -> Result<Option<String>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => normalize_date(value).map(Some),
    }
}
