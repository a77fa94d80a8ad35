//! Static tables describing the expected extension layout.
//!
//! # Responsibility
//! - Enumerate the required manifest fields and on-disk files in check order.
//! - Keep layout expectations as data so callers can substitute them.
//!
//! # Invariants
//! - Table order is report order.
//! - All paths are relative to the validated root and use `/` separators.

/// Manifest file name, resolved under the validated root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest key holding the `size -> path` icon mapping.
pub const ICONS_KEY: &str = "icons";

/// One file the validator expects to find on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistEntry {
    /// Root-relative path.
    pub path: &'static str,
    /// Human-readable label used in error messages.
    pub description: &'static str,
}

impl ChecklistEntry {
    pub const fn new(path: &'static str, description: &'static str) -> Self {
        Self { path, description }
    }
}

/// Optional development file; absence only produces a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevFileEntry {
    pub path: &'static str,
    /// Warning text recorded when the file is absent.
    pub missing_warning: &'static str,
}

const REQUIRED_MANIFEST_FIELDS: &[&str] = &["manifest_version", "name", "version"];

const REQUIRED_FILES: &[ChecklistEntry] = &[
    ChecklistEntry::new("popup/popup.html", "Popup HTML file"),
    ChecklistEntry::new("popup/popup.css", "Popup CSS file"),
    ChecklistEntry::new("popup/popup.js", "Popup JavaScript file"),
    ChecklistEntry::new("content/content.js", "Content script file"),
    ChecklistEntry::new("content/content.css", "Content CSS file"),
    ChecklistEntry::new("background/background.js", "Background script file"),
    ChecklistEntry::new("options/options.html", "Options page HTML"),
    ChecklistEntry::new("options/options.css", "Options page CSS"),
    ChecklistEntry::new("options/options.js", "Options page JavaScript"),
    ChecklistEntry::new("utils/config.js", "Configuration utilities"),
];

const DEV_FILES: &[DevFileEntry] = &[
    DevFileEntry {
        path: "package.json",
        missing_warning: "package.json not found (development setup)",
    },
    DevFileEntry {
        path: "README.md",
        missing_warning: "README.md not found",
    },
];

const NEXT_STEPS: &[&str] = &[
    "Open Chrome and go to chrome://extensions/",
    "Enable 'Developer mode'",
    "Click 'Load unpacked'",
    "Select this directory",
];

/// Returns manifest keys that must be present, in check order.
pub fn required_manifest_fields() -> &'static [&'static str] {
    REQUIRED_MANIFEST_FIELDS
}

/// Returns the default required file checklist, in check order.
pub fn required_files() -> &'static [ChecklistEntry] {
    REQUIRED_FILES
}

/// Returns optional development files, in check order.
pub fn dev_files() -> &'static [DevFileEntry] {
    DEV_FILES
}

/// Returns the instructions printed after a successful validation.
pub fn next_steps() -> &'static [&'static str] {
    NEXT_STEPS
}

#[cfg(test)]
mod tests {
    use super::{dev_files, required_files, required_manifest_fields};
    use std::collections::BTreeSet;

    #[test]
    fn required_file_paths_are_unique_and_relative() {
        let mut seen = BTreeSet::new();
        for entry in required_files() {
            assert!(!entry.path.starts_with('/'), "{} must be relative", entry.path);
            assert!(seen.insert(entry.path), "{} listed twice", entry.path);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn required_fields_keep_declared_order() {
        assert_eq!(
            required_manifest_fields(),
            &["manifest_version", "name", "version"]
        );
    }

    #[test]
    fn dev_files_cover_package_and_readme() {
        let paths: Vec<&str> = dev_files().iter().map(|entry| entry.path).collect();
        assert_eq!(paths, vec!["package.json", "README.md"]);
    }
}
