//! Export the task collection to a JSON file.
//!
//! The export is the verbatim stored JSON array, so an export followed by an
//! import reproduces the collection exactly.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "smart_study_planner_export.json";

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file path (defaults to smart_study_planner_export.json in the
    /// current directory)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Writes the store's verbatim JSON to the given path.
pub fn export_to(store: &TaskStore, path: &Path) -> Result<()> {
    fs::write(path, store.raw())?;
    Ok(())
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = TaskStore::new()?;
    let path = args.output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    export_to(&store, &path)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
