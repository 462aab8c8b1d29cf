use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// Task priority level.
///
/// Defaults to `Medium` both for new tasks and for stored records
/// that predate the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A single study task.
///
/// Field names are serialized in camelCase (`dueTime`) so the stored
/// JSON keeps the original planner's storage shape. `due` carries the
/// calendar date; `due_time` is kept separately for display and is
/// folded in by [`Task::due_timestamp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub reminder: bool,
    pub created: DateTime<Local>,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Creates a new task with a fresh id and creation timestamp.
    ///
    /// Title validation (non-empty) happens at input time, before this
    /// constructor is reached.
    pub fn new(title: &str, subject: Option<String>, due: Option<NaiveDate>, due_time: Option<NaiveTime>, priority: Priority, reminder: bool) -> Self {
        Task {
            id: Uuid::new_v4().simple().to_string(),
            title: title.to_string(),
            subject,
            due,
            due_time,
            priority,
            reminder,
            created: Local::now(),
            done: false,
        }
    }

    /// Combined due timestamp, or `None` for tasks without a deadline.
    ///
    /// A task with a due date but no due time is due at midnight.
    pub fn due_timestamp(&self) -> Option<NaiveDateTime> {
        self.due.map(|date| date.and_time(self.due_time.unwrap_or(NaiveTime::MIN)))
    }

    /// Human-readable due label for table views (`-` when no deadline).
    pub fn due_label(&self) -> String {
        match (self.due, self.due_time) {
            (Some(date), Some(time)) => format!("{} {}", date, time.format("%H:%M")),
            (Some(date), None) => date.to_string(),
            _ => "-".to_string(),
        }
    }

    /// Notification body: the title, with the subject appended when present.
    pub fn reminder_body(&self) -> String {
        match &self.subject {
            Some(subject) if !subject.is_empty() => format!("{} — {}", self.title, subject),
            _ => self.title.clone(),
        }
    }
}
