//! Display-string derivation for list rendering.
//!
//! # Responsibility
//! - Derive the one-line rendering of each record from its current state.
//!
//! # Invariants
//! - Pure functions of record state. Nothing is cached; callers recompute
//!   the affected line after every successful `add` or `complete`.

use crate::model::{StudyMaterial, Task};

/// Renders a material list line: `"{title} - {subject}"`.
pub fn material_line(material: &StudyMaterial) -> String {
    format!("{} - {}", material.title, material.subject)
}

/// Renders a task list line.
///
/// Incomplete tasks render as `"{title} - {deadline} (Incomplete)"`,
/// completed tasks as `"✅ {title} - {deadline} (Completed)"`.
pub fn task_line(task: &Task) -> String {
    if task.completed {
        format!("✅ {} - {} (Completed)", task.title, task.deadline)
    } else {
        format!("{} - {} (Incomplete)", task.title, task.deadline)
    }
}
