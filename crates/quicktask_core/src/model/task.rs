//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by the store, persistence and
//!   filtered views.
//! - Keep the serde shape tolerant of records written by earlier versions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty; callers trim before handing it to the store.
//! - `completed` always deserializes to a plain boolean, whatever shape the
//!   persisted record carried.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier for a task.
///
/// Newtype over `String` rather than `Uuid`: the persisted contract only
/// promises an opaque unique string, so ids written by any earlier version
/// must load unchanged. Fresh ids are UUIDv4 text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Canonical record for one todo entry.
///
/// Equality is field-wise, which is what persistence round-trip checks rely
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation, immutable thereafter.
    pub id: TaskId,
    /// Display text, replaced wholesale by edit.
    pub text: String,
    /// Completion flag, flipped by toggle.
    #[serde(default, deserialize_with = "loose_bool")]
    pub completed: bool,
}

impl Task {
    /// Creates a task with a generated stable id and `completed = false`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(TaskId::generate(), text, false)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by load/test paths where identity already exists.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this task's lifetime.
    pub fn with_id(id: TaskId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }
}

/// Accepts the completion-flag shapes persisted records are known to carry.
///
/// A missing key is handled by `#[serde(default)]`; this covers present but
/// non-boolean values, coerced by truthiness: `false`, `null`, `0` and `""`
/// are incomplete, everything else is complete.
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Null => false,
        serde_json::Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}
