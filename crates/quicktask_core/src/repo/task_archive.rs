//! Durable snapshot of the task collection.
//!
//! # Responsibility
//! - Bridge the in-memory task list and the key-value store.
//! - Absorb absent or corrupt persisted data instead of surfacing it.
//!
//! # Invariants
//! - All persistence happens under the single [`TASKS_KEY`] entry; the whole
//!   value is replaced on every save.
//! - `load` and `save` never return an error to the caller; failures are
//!   logged and the in-memory list stays authoritative.

use crate::model::task::Task;
use crate::repo::kv_repo::KvStore;
use log::{error, info, warn};

/// Fixed key holding the serialized task collection.
pub const TASKS_KEY: &str = "quicktask.tasks";

/// Whole-collection persistence adapter over a key-value store.
pub struct TaskArchive<S: KvStore> {
    store: S,
}

impl<S: KvStore> TaskArchive<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the persisted collection.
    ///
    /// # Contract
    /// - Absent key -> empty collection, not an error.
    /// - Unreadable store or a payload that is not a well-formed sequence of
    ///   task-shaped records -> empty collection plus a logged diagnostic.
    /// - Record-level gaps (missing or non-boolean `completed`) are coerced
    ///   by the task model instead of rejecting the payload.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=tasks_load module=repo status=ok source=empty count=0");
                return Vec::new();
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=repo status=error error_code=kv_get_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                info!(
                    "event=tasks_load module=repo status=ok source=store count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=repo status=recovered error_code=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted collection with `tasks`.
    ///
    /// Store rejections are logged and swallowed; no retry is scheduled and
    /// the in-memory collection remains the source of truth for the rest of
    /// the process lifetime.
    pub fn save(&self, tasks: &[Task]) {
        let payload = match serde_json::to_string(tasks) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=tasks_save module=repo status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.store.set(TASKS_KEY, &payload) {
            Ok(()) => info!(
                "event=tasks_save module=repo status=ok count={}",
                tasks.len()
            ),
            Err(err) => error!(
                "event=tasks_save module=repo status=error error_code=kv_set_failed error={err}"
            ),
        }
    }
}
