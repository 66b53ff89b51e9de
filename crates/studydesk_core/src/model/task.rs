//! Task record with completion tracking.
//!
//! # Responsibility
//! - Define the task record held by `TaskRegistry`.
//! - Provide the single permitted state transition (`mark_completed`).
//!
//! # Invariants
//! - `completed` starts `false` and is monotone: once `true`, no operation
//!   resets it.
//! - `deadline` is an opaque label. No parsing or ordering semantics.

use crate::model::{require_non_empty, RecordValidationError};
use serde::{Deserialize, Serialize};

/// A session-scoped task with a free-form deadline label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable task title.
    pub title: String,
    /// Free-form deadline label, stored verbatim.
    pub deadline: String,
    /// Completion flag. `false` at creation, flipped once by
    /// `TaskRegistry::complete`.
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task.
    ///
    /// Construction does not validate; `TaskRegistry::add` calls
    /// [`Task::validate`] before the record is stored.
    pub fn new(title: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            deadline: deadline.into(),
            completed: false,
        }
    }

    /// Checks that every required field is non-empty.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("deadline", &self.deadline)?;
        Ok(())
    }

    /// Marks this task completed. Idempotent by construction: setting the
    /// flag twice observes the same state as setting it once.
    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
