//! Pure derivation of visible task subsets.
//!
//! # Responsibility
//! - Map (collection, filter mode) to the subset a renderer should show.
//!
//! # Invariants
//! - Never mutates its input.
//! - Relative order of the input is preserved.

use crate::model::task::Task;

/// Selects which completion states are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Every task, unchanged order.
    #[default]
    All,
    /// Only tasks still to be done.
    Active,
    /// Only tasks already completed.
    Completed,
}

impl FilterMode {
    /// Parses a mode name, falling back to `All` for unrecognized input.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Returns the tasks visible under `mode`, in their original relative order.
pub fn apply<'a>(tasks: &'a [Task], mode: FilterMode) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| match mode {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        })
        .collect()
}
