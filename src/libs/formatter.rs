//! Duration formatting utilities for user-friendly display.
//!
//! Converts minute counts into the short human form used throughout the
//! application ("2h 5m", "45m"), and provides the pre-formatted row
//! structure consumed by table rendering and data export.
//!
//! ## Format Specification
//!
//! - Durations render as `"{h}h {m}m"` when at least one full hour is
//!   present, otherwise as `"{m}m"`.
//! - Input is rounded to the nearest whole minute; fractional minutes come
//!   from seconds in parsed clock strings.
//! - Negative input is treated as zero, so arithmetic glitches upstream can
//!   never render a negative duration.
//!
//! ## Examples
//!
//! ```
//! use daylog::libs::formatter::format_duration_minutes;
//!
//! assert_eq!(format_duration_minutes(125.0), "2h 5m");
//! assert_eq!(format_duration_minutes(45.0), "45m");
//! assert_eq!(format_duration_minutes(-50.0), "0m");
//! ```

use serde::{Deserialize, Serialize};

/// A record pre-formatted for display purposes.
///
/// Holds string representations of record properties, suitable for direct
/// use with table rendering and CSV export. All values are formatted once
/// at construction so every display surface shows identical text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// The database identifier of the record.
    pub id: i64,
    /// The formatted start time (e.g., "09:00").
    pub start: String,
    /// The category the task was logged against.
    pub category: String,
    /// The task name.
    pub name: String,
    /// The record kind code ("normal", "pause", "end").
    pub kind: String,
    /// The formatted interval length (e.g., "1h 30m"), or "-" when the
    /// record owns no interval.
    pub duration: String,
}

/// Formats a minute count as a short human-readable duration.
///
/// Negative values clamp to zero and the result is rounded to the nearest
/// whole minute before splitting into hours and minutes. Total function:
/// any finite input produces a string.
pub fn format_duration_minutes(total_minutes: f64) -> String {
    let total = total_minutes.max(0.0).round() as u64;
    let hours = total / 60;
    let minutes = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
