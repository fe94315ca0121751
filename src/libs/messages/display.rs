//! Display implementation for daylog application messages.
//!
//! Converts structured [`Message`] values into the human-readable text
//! shown in the terminal. Keeping every user-facing string in one match
//! keeps wording consistent and makes the text trivially reviewable.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' logged", name),
            Message::TaskDeleted(id) => format!("Record {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("No record with id {}", id),
            Message::RecordsNotFoundForDate(date) => format!("No records found for {}", date),
            Message::ConfirmDeleteRecord(id) => format!("Delete record {}?", id),
            Message::InvalidStartTime(value) => {
                format!("'{}' is not a valid start time, expected HH:MM", value)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Report for {}", date),
            Message::ReportTotal(duration) => format!("Total: {}", duration),
            Message::ReportPauseTotal(duration) => format!("Pauses: {}", duration),
            Message::RecordsHeader(date) => format!("Records for {}", date),

            // === PRUNE MESSAGES ===
            Message::ConfirmPrune(cutoff) => format!("Delete all records before {}?", cutoff),
            Message::PruneDeletedCount(count) => format!("Deleted {} record(s)", count),
            Message::PruneNothingToDelete(cutoff) => format!("No records older than {}", cutoff),
            Message::PruneCutoffUnavailable => {
                "No cutoff date given and no retention policy configured; pass --before or run 'daylog init'".to_string()
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleServer => "Status server settings".to_string(),
            Message::ConfigModuleRetention => "Record retention settings".to_string(),
            Message::ConfigReadFailed(err) => format!("Could not read configuration ({}), starting from defaults", err),
            Message::RetentionTooShort(days) => format!("Retention must keep at least {} days of records", days),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Exported to {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerPort => "Status server port (1024-65535)".to_string(),
            Message::PromptRetentionDays => "Keep records for how many days".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptTaskName => "Task name".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", message)
    }
}
