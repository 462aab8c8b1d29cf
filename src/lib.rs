//! # Studyplan - Smart Study Planner
//!
//! A command-line planner for study tasks with due dates, priorities,
//! a 7-day timeline view and best-effort one-shot reminders.
//!
//! ## Features
//!
//! - **Task Management**: Add, complete and delete study tasks
//! - **Checklist View**: Tasks sorted by due date, deadline-free tasks first
//! - **Timeline View**: 7-day grid bucketing tasks by calendar day
//! - **Reminders**: One-shot notifications near a task's due time,
//!   clamped to 24 hours, delivered by the resident `remind` watcher
//! - **Import/Export**: The whole collection as a single JSON array
//! - **Themes**: Light and dark table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studyplan::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
