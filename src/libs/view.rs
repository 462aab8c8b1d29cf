use crate::libs::config::Theme;
use crate::libs::planner::TimelineDay;
use crate::libs::task::Task;
use prettytable::{format, row, Table};

/// Width of the id column; full ids still work everywhere an id is accepted.
const SHORT_ID: usize = 8;

/// Terminal paint layer for the planner views.
///
/// Receives ready-made view models from `planner.rs` and only draws them.
pub struct View {}

impl View {
    fn table(theme: Theme) -> Table {
        let mut table = Table::new();
        if theme == Theme::Dark {
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
        }
        table
    }

    /// Prints the checklist table. Tasks are expected in display order.
    pub fn tasks(tasks: &[Task], theme: Theme) {
        let mut table = Self::table(theme);

        table.add_row(row!["", "ID", "TITLE", "SUBJECT", "DUE", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![
                if task.done { "[x]" } else { "[ ]" },
                &task.id[..SHORT_ID.min(task.id.len())],
                task.title,
                task.subject.as_deref().unwrap_or(""),
                task.due_label(),
                task.priority
            ]);
        }
        table.printstd();
    }

    /// Prints the 7-day timeline grid, one row per calendar day.
    pub fn timeline(days: &[TimelineDay], theme: Theme) {
        let mut table = Self::table(theme);

        table.add_row(row!["DATE", "TASKS"]);
        for day in days {
            let entries: Vec<String> = day
                .tasks
                .iter()
                .map(|task| match task.due_time {
                    Some(time) => format!("{} — {}", time.format("%H:%M"), task.title),
                    None => task.title.clone(),
                })
                .collect();
            table.add_row(row![day.date, entries.join("\n")]);
        }
        table.printstd();
    }
}
