use crate::{Error, Result};
use plandeck_types::{Task, TaskId};
use std::path::{Path, PathBuf};

/// Sole authority over the persisted task collection.
///
/// The collection lives in one JSON document (an array of tasks in insertion
/// order). Every mutating call is a full read-modify-write cycle against
/// that file: load everything, change it in memory, rewrite the whole
/// document. No partial updates, no locking; a single client at a time is
/// assumed, and two concurrent writers can lose updates.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted tasks in insertion order.
    ///
    /// An absent file is an empty collection. A present but unparseable file
    /// is `Error::Corrupt`, never an empty collection.
    pub fn list(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a task to the collection and persist it.
    pub fn add(&self, task: Task) -> Result<()> {
        let mut tasks = self.list()?;
        tasks.push(task);
        self.save(&tasks)
    }

    /// Remove any task whose id matches. Silent no-op for an unknown id.
    pub fn remove(&self, id: &TaskId) -> Result<()> {
        let mut tasks = self.list()?;
        tasks.retain(|task| task.id != *id);
        self.save(&tasks)
    }

    /// Set the completion flag of the task with the given id.
    /// Silent no-op for an unknown id.
    pub fn update(&self, id: &TaskId, completed: bool) -> Result<()> {
        let mut tasks = self.list()?;
        for task in &mut tasks {
            if task.id == *id {
                task.is_completed = completed;
            }
        }
        self.save(&tasks)
    }

    /// Rewrite the whole document. Creates the parent directory on first use.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(tasks).map_err(Error::Serialize)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
