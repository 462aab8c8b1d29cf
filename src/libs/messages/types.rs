/// All user-facing messages of the application.
///
/// Every piece of text shown to the user is a variant here, formatted by the
/// `Display` implementation in `display.rs` and routed through the `msg_*`
/// macros. Centralizing the text keeps wording consistent and makes the
/// variants usable from both output macros and error construction.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskTitleEmpty,
    NoTasks,
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === STORAGE MESSAGES ===
    StorageReadFailed(String),

    // === IMPORT/EXPORT MESSAGES ===
    ExportCompleted(String),
    ImportCompleted(usize),
    ImportNotAnArray,
    ImportFailed(String),

    // === REMINDER MESSAGES ===
    RemindersScheduled(usize),
    NoRemindersToSchedule,
    ReminderNeedsWatcher,
    NotificationsUnavailable,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    ThemeChanged(String),
}
