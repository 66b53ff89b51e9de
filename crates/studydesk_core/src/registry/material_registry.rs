//! Study-material registry.
//!
//! # Responsibility
//! - Hold study materials in addition order and expose them by position.
//!
//! # Invariants
//! - Append-only: no remove or update operation exists, so every index
//!   returned by `add` stays valid and stable for the session.
//! - Duplicates are permitted; no uniqueness constraint applies to any field.

use crate::model::StudyMaterial;
use crate::registry::{RegistryError, RegistryResult};
use log::{debug, warn};

/// Ordered, append-only collection of study materials.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    items: Vec<StudyMaterial>,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a material, returning its zero-based position.
    ///
    /// # Contract
    /// - Fails with `RegistryError::Validation` when any field is empty;
    ///   the collection is untouched on failure.
    /// - On success the new record sits at `len() - 1` and existing
    ///   positions are unaffected.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        subject: impl Into<String>,
        file_path: impl Into<String>,
    ) -> RegistryResult<usize> {
        let material = StudyMaterial::new(title, subject, file_path);
        if let Err(err) = material.validate() {
            warn!("event=material_add_rejected module=registry status=error reason={err}");
            return Err(err.into());
        }

        self.items.push(material);
        let index = self.items.len() - 1;
        debug!("event=material_added module=registry status=ok index={index}");
        Ok(index)
    }

    /// Gets the material at `index`.
    ///
    /// # Errors
    /// - `RegistryError::IndexOutOfRange` when `index >= len()`.
    pub fn get(&self, index: usize) -> RegistryResult<&StudyMaterial> {
        self.items.get(index).ok_or_else(|| {
            warn!(
                "event=material_get_rejected module=registry status=error index={index} len={}",
                self.items.len()
            );
            RegistryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            }
        })
    }

    /// Current number of stored materials.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the registry holds no materials.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates materials in insertion order. Used by presentation layers to
    /// render the full list.
    pub fn iter(&self) -> impl Iterator<Item = &StudyMaterial> {
        self.items.iter()
    }
}
