//! In-memory registries and their error contract.
//!
//! # Responsibility
//! - Define the registry error taxonomy shared by both collections.
//! - Isolate storage details (growable indexed stores) from callers, who
//!   only ever hold zero-based positional handles.
//!
//! # Invariants
//! - Registry writes must pass record validation before anything is stored.
//! - Failed operations leave the collection exactly as it was. No partial
//!   record is ever appended.
//! - Positions are stable for the whole session: entries are never removed
//!   or reordered, so an index handed out once stays valid.

pub mod material_registry;
pub mod task_registry;

pub use material_registry::MaterialRegistry;
pub use task_registry::TaskRegistry;

use crate::model::RecordValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error returned by registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// A required field on the incoming record was empty.
    Validation(RecordValidationError),
    /// The positional handle does not address a stored record. Points at a
    /// caller bug (a stale or fabricated index), not at registry state.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for registry of length {len}")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<RecordValidationError> for RegistryError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}
