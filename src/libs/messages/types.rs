#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    RecordsNotFoundForDate(String),
    ConfirmDeleteRecord(i64),
    InvalidStartTime(String),

    // === REPORT MESSAGES ===
    ReportHeader(String),        // date
    ReportTotal(String),         // formatted duration
    ReportPauseTotal(String),    // formatted duration
    RecordsHeader(String),       // date

    // === PRUNE MESSAGES ===
    ConfirmPrune(String),    // cutoff date
    PruneDeletedCount(usize),
    PruneNothingToDelete(String), // cutoff date
    PruneCutoffUnavailable,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleRetention,
    ConfigReadFailed(String),
    RetentionTooShort(i64), // minimum keep_days

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // output path

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerPort,
    PromptRetentionDays,
    PromptCategory,
    PromptTaskName,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
