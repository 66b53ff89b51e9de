//! Core domain logic for StudyDesk.
//! This crate is the single source of truth for business invariants.

pub mod display;
pub mod logging;
pub mod model;
pub mod registry;

pub use display::{material_line, task_line};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{RecordValidationError, StudyMaterial, Task};
pub use registry::{MaterialRegistry, RegistryError, RegistryResult, TaskRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
