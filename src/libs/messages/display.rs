//! Display implementation for studyplan application messages.
//!
//! Converts structured [`Message`] variants into the human-readable text
//! shown in the terminal. All user-facing wording lives here, in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as done", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("No task matches id '{}'", id),
            Message::TaskTitleEmpty => "Task title cannot be empty".to_string(),
            Message::NoTasks => "No tasks yet. Add one with 'studyplan add <TITLE>'".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Delete cancelled, nothing changed".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageReadFailed(err) => format!("Failed to load tasks, starting with an empty list: {}", err),

            // === IMPORT/EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::ImportCompleted(count) => format!("Imported {} tasks", count),
            Message::ImportNotAnArray => "Invalid file: expected a JSON array of tasks".to_string(),
            Message::ImportFailed(err) => format!("Failed to import: {}", err),

            // === REMINDER MESSAGES ===
            Message::RemindersScheduled(count) => format!("Waiting on {} scheduled reminders (Ctrl-C to stop)", count),
            Message::NoRemindersToSchedule => "No upcoming reminders to schedule".to_string(),
            Message::ReminderNeedsWatcher => "Reminder saved. Run 'studyplan remind' to receive it".to_string(),
            Message::NotificationsUnavailable => "Notifications are unavailable here, reminders will be skipped".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration file: {}", err),
            Message::ThemeChanged(theme) => format!("Theme switched to {}", theme),
        };
        write!(f, "{}", text)
    }
}
