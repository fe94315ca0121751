//! Parsing of "HH:MM" clock strings into minutes-of-day.
//!
//! The parser is deliberately strict: only two-digit zero-padded components
//! are accepted ("09:30", not "9:30"), hours run 00-23 and minutes/seconds
//! 00-59. Anything else yields `None` rather than an error, since callers
//! sit in display paths where an invalid time simply means a zero-length
//! interval.

/// Converts an "HH:MM" or "HH:MM:SS" string into fractional minutes since
/// local midnight.
///
/// Returns a value in `[0, 1440)` for valid input, `None` otherwise. The
/// input is trimmed before matching; seconds contribute fractionally
/// (`"08:00:30"` parses to `480.5`).
///
/// # Examples
///
/// ```
/// use daylog::libs::time::parse_time_string;
///
/// assert_eq!(parse_time_string("09:30"), Some(570.0));
/// assert_eq!(parse_time_string("9:30"), None);
/// assert_eq!(parse_time_string("24:00"), None);
/// ```
pub fn parse_time_string(input: &str) -> Option<f64> {
    let input = input.trim();
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let hours = two_digit_component(parts[0], 23)?;
    let minutes = two_digit_component(parts[1], 59)?;
    let seconds = match parts.get(2) {
        Some(part) => two_digit_component(part, 59)?,
        None => 0,
    };

    Some(hours as f64 * 60.0 + minutes as f64 + seconds as f64 / 60.0)
}

/// Parses exactly two ASCII digits into a number no greater than `max`.
fn two_digit_component(part: &str, max: u32) -> Option<u32> {
    let bytes = part.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = (bytes[0] - b'0') as u32 * 10 + (bytes[1] - b'0') as u32;
    if value > max {
        return None;
    }
    Some(value)
}
