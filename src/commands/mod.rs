pub mod add;
pub mod delete;
pub mod done;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod remind;
pub mod theme;
pub mod timeline;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a study task")]
    Add(add::AddArgs),
    #[command(about = "Show the task checklist")]
    List(list::ListArgs),
    #[command(about = "Show the 7-day timeline")]
    Timeline(timeline::TimelineArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export tasks to a JSON file")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a JSON file")]
    Import(import::ImportArgs),
    #[command(about = "Run the reminder watcher until all reminders fire")]
    Remind,
    #[command(about = "Toggle the display theme")]
    Theme,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Timeline(args) => timeline::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Remind => remind::cmd().await,
            Commands::Theme => theme::cmd(),
        }
    }
}
