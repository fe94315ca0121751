//! Shared logic for daily report generation.
//!
//! Turns the day's sequence of timestamped records into per-category and
//! per-task totals. A record's interval runs from its own start to the next
//! record's start; the last, still-open record is closed by
//! [`last_task_end_time`], which decides the boundary from the record's day
//! relative to "now". The clock is always injected so callers in tests get
//! deterministic results.

use crate::libs::formatter::{format_duration_minutes, FormattedRecord};
use crate::libs::task::{TaskKind, TaskRecord};
use crate::libs::time::parse_time_string;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Minute-of-day value for the midnight boundary at the end of a day.
pub const END_OF_DAY_MINUTES: f64 = 1440.0;

/// Resolves the end boundary of the most recent, possibly still-open record.
///
/// The returned minute-of-day depends on where the record's day sits
/// relative to `now`:
///
/// - unparseable or impossible dates echo `start_minutes` back, so a broken
///   record yields a zero-length interval instead of a bogus one;
/// - a future day also echoes `start_minutes` (nothing has elapsed yet);
/// - a past day returns `1440.0`, the midnight boundary;
/// - today returns the current minute-of-day, rounded and capped at `1439`
///   so a live clock just before midnight never reports a full day, unless
///   the record starts later than "now", which again yields zero length.
///
/// Output is always within `[0, 1440]`.
pub fn last_task_end_time(task_date: &str, start_minutes: f64, now: NaiveDateTime) -> f64 {
    let date = match NaiveDate::parse_from_str(task_date.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return start_minutes,
    };

    let today = now.date();
    if date > today {
        return start_minutes;
    }
    if date < today {
        return END_OF_DAY_MINUTES;
    }

    let now_minutes = (now.hour() as f64 * 60.0 + now.minute() as f64 + now.second() as f64 / 60.0)
        .round()
        .min(END_OF_DAY_MINUTES - 1.0);
    if start_minutes > now_minutes {
        start_minutes
    } else {
        now_minutes
    }
}

/// Time spent on one task, with its share of the day's total.
#[derive(Debug, Clone)]
pub struct TaskSummary {
    pub name: String,
    pub minutes: f64,
    pub percent: f64,
}

/// Time spent in one category, broken down by task.
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub name: String,
    pub minutes: f64,
    pub percent: f64,
    pub tasks: Vec<TaskSummary>,
}

/// Aggregated view of one day's records.
#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub categories: Vec<CategorySummary>,
    /// Total minutes across all normal tasks.
    pub total_minutes: f64,
    /// Total minutes spent in pauses.
    pub pause_minutes: f64,
}

/// Computes the interval length of each record, aligned with input order.
///
/// Records are ordered by parsed start time; each interval runs to the next
/// record's start, the final one to the resolved end boundary. `None` marks
/// records that own no interval: unparseable start times and `end` markers.
fn interval_minutes(records: &[TaskRecord], now: NaiveDateTime) -> Vec<Option<f64>> {
    let mut durations: Vec<Option<f64>> = vec![None; records.len()];

    // Chronological positions of the records with a valid start time.
    let mut timed: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| parse_time_string(&record.start).map(|start| (index, start)))
        .collect();
    timed.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (position, &(index, start)) in timed.iter().enumerate() {
        if records[index].kind == TaskKind::End {
            continue;
        }
        let end = match timed.get(position + 1) {
            Some(&(_, next_start)) => next_start,
            None => {
                let date_str = records[index].date.format("%Y-%m-%d").to_string();
                last_task_end_time(&date_str, start, now)
            }
        };
        durations[index] = Some((end - start).max(0.0));
    }

    durations
}

/// Builds the aggregated daily report for a set of records.
///
/// Normal records are grouped by category and then task name; pause records
/// feed the pause total; end markers only terminate the preceding interval.
/// Categories and tasks are sorted by descending time (name as tiebreaker)
/// so the report is deterministic.
pub fn build_day_report(records: &[TaskRecord], now: NaiveDateTime) -> DayReport {
    let date = records.first().map(|r| r.date).unwrap_or_else(|| now.date());
    let durations = interval_minutes(records, now);

    let mut pause_minutes = 0.0;
    let mut total_minutes = 0.0;
    let mut categories: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();

    for (record, duration) in records.iter().zip(&durations) {
        let minutes = match duration {
            Some(minutes) => *minutes,
            None => continue,
        };
        match record.kind {
            TaskKind::Normal => {
                total_minutes += minutes;
                *categories
                    .entry(record.category.as_str())
                    .or_default()
                    .entry(record.name.as_str())
                    .or_default() += minutes;
            }
            TaskKind::Pause => pause_minutes += minutes,
            TaskKind::End => {}
        }
    }

    let mut summaries: Vec<CategorySummary> = categories
        .into_iter()
        .map(|(category, tasks)| {
            let category_minutes: f64 = tasks.values().sum();
            let mut task_summaries: Vec<TaskSummary> = tasks
                .into_iter()
                .map(|(name, minutes)| TaskSummary {
                    name: name.to_string(),
                    minutes,
                    percent: percent_of(minutes, total_minutes),
                })
                .collect();
            task_summaries.sort_by(|a, b| b.minutes.total_cmp(&a.minutes).then_with(|| a.name.cmp(&b.name)));
            CategorySummary {
                name: category.to_string(),
                minutes: category_minutes,
                percent: percent_of(category_minutes, total_minutes),
                tasks: task_summaries,
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.minutes.total_cmp(&a.minutes).then_with(|| a.name.cmp(&b.name)));

    DayReport {
        date,
        categories: summaries,
        total_minutes,
        pause_minutes,
    }
}

fn percent_of(minutes: f64, total: f64) -> f64 {
    if total > 0.0 {
        minutes / total * 100.0
    } else {
        0.0
    }
}

/// A trait for formatting a collection of records for display.
pub trait RecordGroup {
    /// Formats records into [`FormattedRecord`] rows, with interval
    /// durations computed against the given clock.
    fn format(&self, now: NaiveDateTime) -> Vec<FormattedRecord>;
}

impl RecordGroup for Vec<TaskRecord> {
    fn format(&self, now: NaiveDateTime) -> Vec<FormattedRecord> {
        let durations = interval_minutes(self, now);
        self.iter()
            .zip(&durations)
            .map(|(record, duration)| FormattedRecord {
                id: record.id.unwrap_or(0),
                start: record.start.clone(),
                category: record.category.clone(),
                name: record.name.clone(),
                kind: record.kind.to_string(),
                duration: duration.map_or_else(|| "-".to_string(), format_duration_minutes),
            })
            .collect()
    }
}
