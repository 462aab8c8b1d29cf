//! Toggle task completion.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id (full id or unique prefix)
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    match TaskStore::new()?.toggle_done(&args.id)? {
        Some((title, true)) => msg_success!(Message::TaskCompleted(title)),
        Some((title, false)) => msg_success!(Message::TaskReopened(title)),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.id)),
    }
    Ok(())
}
