//! Interactive configuration setup.

use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_args: InitArgs) -> Result<()> {
    Config::init()?;
    Ok(())
}
