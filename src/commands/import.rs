//! Import a task collection from a JSON file.
//!
//! A valid import wholesale-replaces the stored collection. Anything that is
//! not a JSON array of task records is rejected with a visible error and the
//! existing collection is left unchanged.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::Task;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File containing a JSON array of tasks
    #[arg(required = true)]
    file: PathBuf,
}

/// Parses the file and replaces the store's collection with its contents.
///
/// Returns the imported task count. The store is not touched unless the
/// payload is a parseable array of tasks.
pub fn import_from(store: &TaskStore, path: &Path) -> Result<usize> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => msg_bail_anyhow!(Message::ImportFailed(err.to_string())),
    };
    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => msg_bail_anyhow!(Message::ImportFailed(err.to_string())),
    };
    if !value.is_array() {
        msg_bail_anyhow!(Message::ImportNotAnArray);
    }
    let tasks: Vec<Task> = match serde_json::from_value(value) {
        Ok(tasks) => tasks,
        Err(err) => msg_bail_anyhow!(Message::ImportFailed(err.to_string())),
    };

    store.replace_all(tasks)
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let store = TaskStore::new()?;
    let count = import_from(&store, &args.file)?;
    msg_success!(Message::ImportCompleted(count));
    Ok(())
}
