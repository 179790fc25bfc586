//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical task collection and its mutation entry points.
//! - Keep callers decoupled from storage details.

pub mod task_store;
