//! One-shot reminder scheduling.
//!
//! Reminders are fire-and-forget timers that live only as long as the
//! `remind` watcher process. Nothing about a pending timer is persisted:
//! every watcher run reschedules all flagged tasks from scratch, a due time
//! that passed while no watcher was running fires nothing, and a scheduled
//! reminder cannot be withdrawn even if its task is deleted or completed in
//! the meantime.
//!
//! Fire delays are clamped to 24 hours, so a task due further out reminds at
//! the 24-hour mark instead of its true due time. This mirrors the original
//! planner's behavior and is kept intentionally.

use crate::libs::notifier::{Notifier, REMINDER_SUMMARY};
use crate::libs::task::Task;
use crate::msg_debug;
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Upper bound on a single reminder timer.
pub const MAX_REMINDER_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Computes the timer delay for a due timestamp, or `None` when the due
/// time is not in the future. Delays beyond [`MAX_REMINDER_DELAY`] are
/// clamped to it.
pub fn fire_delay(due: NaiveDateTime, now: NaiveDateTime) -> Option<Duration> {
    let until = due.signed_duration_since(now).to_std().ok()?;
    if until.is_zero() {
        return None;
    }
    Some(until.min(MAX_REMINDER_DELAY))
}

pub struct ReminderScheduler<N: Notifier> {
    notifier: Arc<N>,
}

impl<N: Notifier + 'static> ReminderScheduler<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier: Arc::new(notifier) }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Schedules a one-shot reminder for a task.
    ///
    /// No-op when the notifier is unavailable, the task is not flagged for a
    /// reminder, it has no due timestamp, or the due timestamp is not in the
    /// future. Availability is checked again at fire time and the
    /// notification is silently skipped when it is gone.
    pub fn schedule(&self, task: &Task) -> Option<JoinHandle<()>> {
        if !self.notifier.is_available() || !task.reminder {
            return None;
        }
        let due = task.due_timestamp()?;
        let delay = fire_delay(due, Local::now().naive_local())?;

        msg_debug!("Scheduling reminder for '{}' in {:?}", task.title, delay);
        let notifier = self.notifier.clone();
        let body = task.reminder_body();
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if notifier.is_available() {
                let _ = notifier.notify(REMINDER_SUMMARY, &body);
            }
        }))
    }

    /// Schedules every flagged task in the collection, returning the handles
    /// of the timers that were actually armed.
    pub fn schedule_all(&self, tasks: &[Task]) -> Vec<JoinHandle<()>> {
        tasks.iter().filter_map(|task| self.schedule(task)).collect()
    }
}
