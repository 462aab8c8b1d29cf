//! Add a study task to the collection.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{Priority, Task};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Subject or course the task belongs to
    #[arg(long, short)]
    subject: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long, short)]
    due: Option<NaiveDate>,

    /// Due time of day (HH:MM), only meaningful together with --due
    #[arg(long, short, value_parser = parse_time)]
    time: Option<NaiveTime>,

    /// Task priority
    #[arg(long, short, value_enum, default_value = "medium")]
    priority: Priority,

    /// Schedule a one-shot reminder near the due time
    #[arg(long, short)]
    reminder: bool,
}

/// Parses a time-of-day argument, with or without seconds.
fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|err| format!("invalid time '{}': {}", value, err))
}

/// Validates a task title: must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::TaskTitleEmpty);
    }
    Ok(title.to_string())
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let title = validate_title(&args.title)?;
    let task = Task::new(&title, args.subject, args.due, args.time, args.priority, args.reminder);
    let reminder = task.reminder;

    TaskStore::new()?.append(task)?;

    msg_success!(Message::TaskCreated(title));
    if reminder {
        msg_info!(Message::ReminderNeedsWatcher);
    }
    Ok(())
}
