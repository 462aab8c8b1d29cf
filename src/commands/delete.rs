//! Delete a task after interactive confirmation.
//!
//! Delete is the only destructive command; it never proceeds without the
//! user confirming, and declining leaves the collection untouched.

use crate::libs::confirm::{Confirmer, DialoguerConfirmer};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id (full id or unique prefix)
    #[arg(required = true)]
    id: String,
}

/// Deletes the task with the given id once the confirmer agrees.
///
/// A declined confirmation returns without touching the store.
pub fn delete_task(store: &TaskStore, id: &str, confirmer: &dyn Confirmer) -> Result<()> {
    let task = match store.find(id) {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFound(id.to_string())),
    };

    if !confirmer.confirm(&Message::ConfirmDeleteTask(task.title.clone()).to_string())? {
        msg_info!(Message::DeleteCancelled);
        return Ok(());
    }

    match store.delete(&task.id)? {
        Some(title) => msg_success!(Message::TaskDeleted(title)),
        None => msg_bail_anyhow!(Message::TaskNotFound(id.to_string())),
    }
    Ok(())
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    delete_task(&TaskStore::new()?, &args.id, &DialoguerConfirmer)
}
