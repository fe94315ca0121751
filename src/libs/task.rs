use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a logged record.
///
/// `Normal` records are ordinary tasks and are the only kind that
/// contributes to category totals. A `Pause` marks a break; the interval
/// between its start and the next record's start counts as pause time.
/// An `End` marker closes the day and owns no interval of its own.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    #[default]
    Normal,
    Pause,
    End,
}

impl TaskKind {
    /// String code stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Normal => "normal",
            TaskKind::Pause => "pause",
            TaskKind::End => "end",
        }
    }

    /// Parses a stored string code, defaulting unknown codes to `Normal`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pause" => TaskKind::Pause,
            "end" => TaskKind::End,
            _ => TaskKind::Normal,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged activity: a category, a task name, a start time and a date.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: Option<i64>,
    /// The day this record belongs to.
    pub date: NaiveDate,
    /// Start time as an "HH:MM" string, parsed lazily by the report layer.
    pub start: String,
    pub category: String,
    pub name: String,
    pub kind: TaskKind,
}

impl TaskRecord {
    pub fn new(date: NaiveDate, start: &str, category: &str, name: &str, kind: TaskKind) -> Self {
        TaskRecord {
            id: None,
            date,
            start: start.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Date(NaiveDate),
}
