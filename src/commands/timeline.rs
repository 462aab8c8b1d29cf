//! Display the 7-day timeline.

use crate::libs::config::Config;
use crate::libs::planner;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct TimelineArgs {}

pub fn cmd(_args: TimelineArgs) -> Result<()> {
    let tasks = TaskStore::new()?.load();
    let config = Config::read()?;

    let days = planner::timeline(&tasks, Local::now().date_naive());
    View::timeline(&days, config.theme);
    Ok(())
}
