//! Study material record.
//!
//! # Responsibility
//! - Define the immutable study-material record held by `MaterialRegistry`.
//!
//! # Invariants
//! - All three fields are set once at construction and never change.
//! - `file_path` is an opaque path string; existence is never checked here.
//!   Opening the file belongs to the host layer.

use crate::model::{require_non_empty, RecordValidationError};
use serde::{Deserialize, Serialize};

/// A study material reference: what it is, which subject it belongs to, and
/// where the backing file lives.
///
/// The registry only ever hands out shared references, so the record stays
/// immutable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMaterial {
    /// Human-readable material title.
    pub title: String,
    /// Subject the material is filed under.
    pub subject: String,
    /// Filesystem path to the backing document, stored verbatim.
    pub file_path: String,
}

impl StudyMaterial {
    /// Creates a material record.
    ///
    /// Construction does not validate; `MaterialRegistry::add` calls
    /// [`StudyMaterial::validate`] before the record is stored.
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            file_path: file_path.into(),
        }
    }

    /// Checks that every required field is non-empty.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("subject", &self.subject)?;
        require_non_empty("file_path", &self.file_path)?;
        Ok(())
    }
}
