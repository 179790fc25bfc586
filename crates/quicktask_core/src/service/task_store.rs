//! Task collection owner and mutation entry points.
//!
//! # Responsibility
//! - Hold the canonical in-memory task list.
//! - Persist through the archive after every successful mutation.
//!
//! # Invariants
//! - At most one task per id in the collection at any time.
//! - Every successful mutation persists synchronously before returning, so
//!   the persisted store never lags the collection by more than one
//!   operation.
//! - Operations on unknown ids are no-ops and do not touch the store.

use crate::model::task::{Task, TaskId};
use crate::repo::kv_repo::KvStore;
use crate::repo::task_archive::TaskArchive;
use log::info;

/// Single source of truth for the task collection.
///
/// Mutation goes through `&mut self`, so a second in-flight mutation cannot
/// exist while one is running.
pub struct TaskStore<S: KvStore> {
    archive: TaskArchive<S>,
    tasks: Vec<Task>,
}

impl<S: KvStore> TaskStore<S> {
    /// Creates an empty store over `archive`.
    ///
    /// Call [`TaskStore::initialize`] before any other operation.
    pub fn new(archive: TaskArchive<S>) -> Self {
        Self {
            archive,
            tasks: Vec::new(),
        }
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// # Contract
    /// - Called exactly once, before any other operation.
    pub fn initialize(&mut self) {
        self.tasks = self.archive.load();
        info!(
            "event=store_init module=service status=ok count={}",
            self.tasks.len()
        );
    }

    /// Read view of the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new incomplete task and persists.
    ///
    /// Returns `None` without mutating or persisting anything when `text`
    /// trims to empty; callers are expected to hand in already-trimmed text.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        if text.trim().is_empty() {
            return None;
        }

        let task = Task::new(text);
        self.tasks.push(task.clone());
        self.archive.save(&self.tasks);
        Some(task)
    }

    /// Replaces the text of the task with `id` and persists.
    ///
    /// Returns `false` (no mutation, no persistence) when `id` is unknown or
    /// `new_text` trims to empty.
    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> bool {
        if new_text.trim().is_empty() {
            return false;
        }

        match self.tasks.iter_mut().find(|task| task.id == *id) {
            Some(task) => task.text = new_text.to_string(),
            None => return false,
        }

        self.archive.save(&self.tasks);
        true
    }

    /// Removes the task with `id`, preserving the relative order of the rest.
    ///
    /// Returns `false` (no persistence) when no task matched.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != *id);
        if self.tasks.len() == before {
            return false;
        }

        self.archive.save(&self.tasks);
        true
    }

    /// Flips the completion flag of the task with `id` and persists.
    ///
    /// Returns `false` (no mutation, no persistence) when `id` is unknown.
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == *id) {
            Some(task) => task.completed = !task.completed,
            None => return false,
        }

        self.archive.save(&self.tasks);
        true
    }
}
