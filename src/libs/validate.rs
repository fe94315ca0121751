//! Validation for user-supplied settings.
//!
//! Unlike the total functions in the report path, validators reject bad
//! input loudly: every distinct violation maps to its own
//! [`ValidationError`] variant with its own message, so a rejected setting
//! can be surfaced to the user verbatim at the configuration boundary.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// The minimum age, in days, a cutoff date must have relative to today.
pub const MIN_CUTOFF_AGE_DAYS: i64 = 30;

/// Lowest port the local status server may be configured to use.
pub const MIN_HTTP_PORT: i64 = 1024;
/// Highest valid TCP port.
pub const MAX_HTTP_PORT: i64 = 65535;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("cutoff date must be a non-empty string")]
    EmptyCutoffDate,
    #[error("cutoff date '{0}' does not match the YYYY-MM-DD format")]
    CutoffDateFormat(String),
    #[error("cutoff date '{0}' is not a real calendar date")]
    CutoffDateNotReal(String),
    #[error("cutoff year {year} is outside the allowed range 1970..={max_year}")]
    CutoffYearOutOfRange { year: i32, max_year: i32 },
    #[error("cutoff date '{0}' is in the future")]
    CutoffDateInFuture(String),
    #[error("cutoff date '{0}' must be at least {MIN_CUTOFF_AGE_DAYS} days before today")]
    CutoffDateTooRecent(String),
    #[error("HTTP port {0} must be between {MIN_HTTP_PORT} and {MAX_HTTP_PORT}")]
    PortOutOfRange(i64),
}

/// Validates a retention cutoff date and returns it unchanged.
///
/// Checks run in a fixed order so each failure mode is independently
/// testable: emptiness, `YYYY-MM-DD` shape, calendar realness, year within
/// `[1970, today's year]`, not in the future, and at least
/// [`MIN_CUTOFF_AGE_DAYS`] days old. A date exactly 30 days before `today`
/// passes. The input is never normalized.
pub fn validate_cutoff_date<'a>(input: &'a str, today: NaiveDate) -> Result<&'a str, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyCutoffDate);
    }
    if !matches_date_format(input) {
        return Err(ValidationError::CutoffDateFormat(input.to_string()));
    }

    // The shape is already verified, so these slices parse cleanly.
    let year: i32 = input[0..4].parse().unwrap_or(0);
    let month: u32 = input[5..7].parse().unwrap_or(0);
    let day: u32 = input[8..10].parse().unwrap_or(0);
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::CutoffDateNotReal(input.to_string()))?;

    let max_year = today.year();
    if year < 1970 || year > max_year {
        return Err(ValidationError::CutoffYearOutOfRange { year, max_year });
    }
    if date > today {
        return Err(ValidationError::CutoffDateInFuture(input.to_string()));
    }
    if (today - date).num_days() < MIN_CUTOFF_AGE_DAYS {
        return Err(ValidationError::CutoffDateTooRecent(input.to_string()));
    }

    Ok(input)
}

/// Strict `YYYY-MM-DD` shape check: four digits, dash, two digits, dash,
/// two digits, nothing else.
fn matches_date_format(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes[0..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(|b| b.is_ascii_digit())
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(|b| b.is_ascii_digit())
}

/// Validates a local HTTP port number.
///
/// The configured port must fall in `[1024, 65535]`; the privileged range
/// is rejected. Non-numeric input never reaches this function, the CLI and
/// config layers parse it first.
pub fn validate_http_port(input: i64) -> Result<u16, ValidationError> {
    if !(MIN_HTTP_PORT..=MAX_HTTP_PORT).contains(&input) {
        return Err(ValidationError::PortOutOfRange(input));
    }
    Ok(input as u16)
}
