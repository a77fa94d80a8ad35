//! Browser extension layout checks.
//! This crate owns the checklist tables and the validation pass.

pub mod checklist;
pub mod logging;
pub mod manifest;
pub mod probe;
pub mod report;
pub mod validator;

pub use checklist::{ChecklistEntry, DevFileEntry};
pub use logging::{init_logging, logging_status};
pub use manifest::{
    load_manifest, IconEntry, IconsError, ManifestDocument, ManifestError, ManifestResult,
};
pub use probe::{probe_file, FileProbe};
pub use report::render_report;
pub use validator::{Progress, Section, StructureValidator, ValidationOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
