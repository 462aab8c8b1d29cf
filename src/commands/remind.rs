//! Run the resident reminder watcher.
//!
//! Loads the collection, arms a one-shot timer for every task flagged with a
//! reminder and a future due time, and stays in the foreground until all of
//! them have fired. Timers only exist inside this process; restarting it
//! reschedules everything from scratch.

use crate::libs::messages::Message;
use crate::libs::notifier::{Notifier, TerminalNotifier};
use crate::libs::scheduler::ReminderScheduler;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let tasks = TaskStore::new()?.load();

    let scheduler = ReminderScheduler::new(TerminalNotifier);
    if !scheduler.notifier().is_available() {
        msg_warning!(Message::NotificationsUnavailable);
    }

    let handles = scheduler.schedule_all(&tasks);
    if handles.is_empty() {
        msg_info!(Message::NoRemindersToSchedule);
        return Ok(());
    }

    msg_print!(Message::RemindersScheduled(handles.len()));
    for handle in handles {
        let _ = handle.await;
    }
    Ok(())
}
