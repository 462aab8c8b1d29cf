//! Display the task checklist.
//!
//! Tasks are shown ascending by due timestamp; tasks without a due date come
//! first. Stored order is not meaningful, display order is always computed
//! here.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::planner;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {}

pub fn cmd(_args: ListArgs) -> Result<()> {
    let tasks = TaskStore::new()?.load();
    if tasks.is_empty() {
        msg_print!(Message::NoTasks);
        return Ok(());
    }

    let config = Config::read()?;
    View::tasks(&planner::sorted_checklist(tasks), config.theme);
    Ok(())
}
