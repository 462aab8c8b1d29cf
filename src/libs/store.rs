//! Task collection persistence.
//!
//! The whole collection lives in one JSON array on disk and is always read
//! and written in full. There is no indexing, no partial update and no
//! migration logic; mutations are read-modify-write over the full array.
//!
//! Read failures (missing, corrupt or unparseable data) are recovered
//! locally: [`TaskStore::load`] logs a warning and returns an empty
//! collection instead of erroring. Write failures propagate to the caller.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_warning;
use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the persisted task collection.
pub const STORAGE_FILE_NAME: &str = "tasks.json";

/// Single-file task store.
///
/// Constructed against the platform data directory by default; tests and
/// alternative frontends inject an explicit path with [`TaskStore::with_path`].
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(STORAGE_FILE_NAME)?,
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full task collection.
    ///
    /// Never fails: an absent file is an empty collection, and corrupt or
    /// unparseable contents are logged and treated the same way.
    pub fn load(&self) -> Vec<Task> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                msg_warning!(Message::StorageReadFailed(err.to_string()));
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                msg_warning!(Message::StorageReadFailed(err.to_string()));
                Vec::new()
            }
        }
    }

    /// Serializes and persists the entire collection, replacing any prior
    /// value. Write failures are not recovered here.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(tasks)?)?;
        Ok(())
    }

    /// Verbatim stored JSON, as used by export. An absent file exports as an
    /// empty array.
    pub fn raw(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_else(|_| "[]".to_string())
    }

    /// Appends a task to the collection.
    pub fn append(&self, task: Task) -> Result<()> {
        let mut tasks = self.load();
        tasks.push(task);
        self.save(&tasks)
    }

    /// Replaces the whole collection, returning the new task count.
    pub fn replace_all(&self, tasks: Vec<Task>) -> Result<usize> {
        self.save(&tasks)?;
        Ok(tasks.len())
    }

    /// Finds a task by full id or unique id prefix.
    ///
    /// An ambiguous prefix matches nothing, so a partial id can never
    /// silently act on the wrong task.
    pub fn find(&self, id: &str) -> Option<Task> {
        let tasks = self.load();
        if let Some(task) = tasks.iter().find(|t| t.id == id) {
            return Some(task.clone());
        }
        let mut matches = tasks.iter().filter(|t| t.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(task.clone()),
            _ => None,
        }
    }

    /// Toggles the completion flag of the task with the given id.
    ///
    /// Returns the task's title and its new `done` state, or `None` when no
    /// task matches.
    pub fn toggle_done(&self, id: &str) -> Result<Option<(String, bool)>> {
        let target = match self.find(id) {
            Some(task) => task.id,
            None => return Ok(None),
        };
        let mut tasks = self.load();
        let mut toggled = None;
        for task in tasks.iter_mut() {
            if task.id == target {
                task.done = !task.done;
                toggled = Some((task.title.clone(), task.done));
            }
        }
        self.save(&tasks)?;
        Ok(toggled)
    }

    /// Removes the task with the given id, returning its title.
    pub fn delete(&self, id: &str) -> Result<Option<String>> {
        let target = match self.find(id) {
            Some(task) => task,
            None => return Ok(None),
        };
        let tasks: Vec<Task> = self.load().into_iter().filter(|t| t.id != target.id).collect();
        self.save(&tasks)?;
        Ok(Some(target.title))
    }
}
