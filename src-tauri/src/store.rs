// Task store
// Ordered in-memory task list; every mutation is saved before it becomes visible

use std::path::{Path, PathBuf};

use crate::error::{Result, TaskError};
use crate::filter;
use crate::models::task::normalizeDescription;
use crate::models::{Task, ViewMode};
use crate::storage;

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Empty store backed by `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Store loaded from `path`; a missing file gives an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn isEmpty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Filtered copy of the tasks
    pub fn view(&self, mode: ViewMode) -> Vec<Task> {
        filter::apply(&self.tasks, mode)
    }

    /// Replace the in-memory list with the file contents.
    /// On failure the store is left empty.
    pub fn load(&mut self) -> Result<()> {
        self.tasks.clear();
        self.tasks = storage::readTasks(&self.path)?;
        tracing::info!(path = %self.path.display(), count = self.tasks.len(), "Loaded tasks");
        Ok(())
    }

    /// Write the whole list to disk
    pub fn save(&self) -> Result<()> {
        storage::writeTasks(&self.path, &self.tasks)?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "Saved tasks");
        Ok(())
    }

    pub fn add(&mut self, description: &str) -> Result<Task> {
        let task = Task::new(description)?;
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        tracing::info!(id = %task.id, "Added task");
        Ok(task)
    }

    /// Replace a task's text, keeping its completion flag and position
    pub fn update(&mut self, id: &str, description: &str) -> Result<Task> {
        let index = self.indexOf(id)?;
        let description = normalizeDescription(description)?;
        let mut next = self.tasks.clone();
        next[index].description = description;
        let updated = next[index].clone();
        self.commit(next)?;
        tracing::info!(id = %id, "Updated task");
        Ok(updated)
    }

    pub fn toggleComplete(&mut self, id: &str) -> Result<Task> {
        let index = self.indexOf(id)?;
        let mut next = self.tasks.clone();
        next[index].complete = !next[index].complete;
        let toggled = next[index].clone();
        self.commit(next)?;
        tracing::info!(id = %id, complete = toggled.complete, "Toggled task");
        Ok(toggled)
    }

    /// Remove a task; later tasks move up one position
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let index = self.indexOf(id)?;
        let mut next = self.tasks.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        tracing::info!(id = %id, "Deleted task");
        Ok(removed)
    }

    fn indexOf(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::notFound(id))
    }

    /// Persist `next`, then adopt it. A failed save leaves memory untouched.
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        storage::writeTasks(&self.path, &next)?;
        self.tasks = next;
        Ok(())
    }
}
