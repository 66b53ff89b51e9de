//! Domain model for study materials and tasks.
//!
//! # Responsibility
//! - Define the canonical record types held by the registries.
//! - Own the shared required-field validation rule used on every add.
//!
//! # Invariants
//! - Required fields are rejected only when *literally* empty. A
//!   whitespace-only string passes; the check never trims.
//! - `StudyMaterial` has no mutating methods after construction.
//! - `Task.completed` only ever moves from `false` to `true`.

pub mod material;
pub mod task;

pub use material::StudyMaterial;
pub use task::Task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a required record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// The named required field was the empty string.
    EmptyField { field: &'static str },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for RecordValidationError {}

/// Shared required-field check.
///
/// Deliberately tests literal emptiness only. The source behavior treats a
/// string of spaces as valid input, and that laxity is preserved.
pub(crate) fn require_non_empty(
    field: &'static str,
    value: &str,
) -> Result<(), RecordValidationError> {
    if value.is_empty() {
        return Err(RecordValidationError::EmptyField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_non_empty, RecordValidationError};

    #[test]
    fn empty_value_is_rejected_with_field_name() {
        let err = require_non_empty("title", "").unwrap_err();
        assert_eq!(err, RecordValidationError::EmptyField { field: "title" });
        assert_eq!(err.to_string(), "required field `title` is empty");
    }

    #[test]
    fn whitespace_only_value_passes() {
        require_non_empty("subject", "   ").expect("whitespace is not trimmed before the check");
    }
}
