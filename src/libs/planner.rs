//! Pure view-model construction over the task collection.
//!
//! These functions read the collection and produce render-ready structures
//! with no side effects; the painting itself happens in `view.rs`. Both are
//! safe to call repeatedly.

use crate::libs::task::Task;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Number of days covered by the timeline, starting today inclusive.
pub const TIMELINE_DAYS: u64 = 7;

/// One calendar day of the timeline with the tasks due on it.
#[derive(Debug, Clone)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

/// Sorts the collection for the checklist view: ascending by due timestamp,
/// with tasks lacking a due date first. The sort is stable, so input order
/// is preserved within equal keys.
pub fn sorted_checklist(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(|task| task.due_timestamp().unwrap_or(NaiveDateTime::MIN));
    tasks
}

/// Buckets tasks into the next [`TIMELINE_DAYS`] calendar days.
///
/// A task lands in the bucket whose date equals its due date; tasks without
/// a due date, or due outside the window, appear in no bucket. Within a
/// bucket, input order is kept.
pub fn timeline(tasks: &[Task], start: NaiveDate) -> Vec<TimelineDay> {
    (0..TIMELINE_DAYS)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .unwrap_or(start);
            let tasks = tasks.iter().filter(|task| task.due == Some(date)).cloned().collect();
            TimelineDay { date, tasks }
        })
        .collect()
}
