//! Task registry with completion tracking.
//!
//! # Responsibility
//! - Hold tasks in addition order, expose them by position, and own the
//!   single in-place mutation the model allows: flipping `completed`.
//!
//! # Invariants
//! - Append-only, duplicate-tolerant, stable positions. Same store shape as
//!   `MaterialRegistry`.
//! - `complete` is idempotent: completing an already-completed task is a
//!   no-op with no observable state change.

use crate::model::Task;
use crate::registry::{RegistryError, RegistryResult};
use log::{debug, warn};

/// Ordered, append-only collection of tasks.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    items: Vec<Task>,
}

impl TaskRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an incomplete task, returning its zero-based
    /// position.
    ///
    /// # Contract
    /// - Fails with `RegistryError::Validation` when either field is empty;
    ///   the collection is untouched on failure.
    /// - The new task always starts with `completed = false`.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        deadline: impl Into<String>,
    ) -> RegistryResult<usize> {
        let task = Task::new(title, deadline);
        if let Err(err) = task.validate() {
            warn!("event=task_add_rejected module=registry status=error reason={err}");
            return Err(err.into());
        }

        self.items.push(task);
        let index = self.items.len() - 1;
        debug!("event=task_added module=registry status=ok index={index}");
        Ok(index)
    }

    /// Gets the task at `index`.
    ///
    /// # Errors
    /// - `RegistryError::IndexOutOfRange` when `index >= len()`.
    pub fn get(&self, index: usize) -> RegistryResult<&Task> {
        self.items.get(index).ok_or_else(|| {
            warn!(
                "event=task_get_rejected module=registry status=error index={index} len={}",
                self.items.len()
            );
            RegistryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            }
        })
    }

    /// Marks the task at `index` completed.
    ///
    /// # Contract
    /// - Fails with `RegistryError::IndexOutOfRange` when out of bounds;
    ///   no task changes on failure.
    /// - Already-completed tasks are left as they are (permitted self-loop).
    /// - No field other than `completed` is touched.
    pub fn complete(&mut self, index: usize) -> RegistryResult<()> {
        let len = self.items.len();
        let task = self.items.get_mut(index).ok_or_else(|| {
            warn!("event=task_complete_rejected module=registry status=error index={index} len={len}");
            RegistryError::IndexOutOfRange { index, len }
        })?;

        if task.completed {
            debug!("event=task_completed module=registry status=noop index={index}");
            return Ok(());
        }

        task.mark_completed();
        debug!("event=task_completed module=registry status=ok index={index}");
        Ok(())
    }

    /// Current number of stored tasks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the registry holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates tasks in insertion order. Used by presentation layers to
    /// render the full list.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }
}
