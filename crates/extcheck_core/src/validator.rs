//! Structure validator: one linear pass over the extension layout.
//!
//! # Responsibility
//! - Run manifest, icon, checklist and development-file checks in order.
//! - Accumulate failures as data; never abort the pass on a failed check.
//!
//! # Invariants
//! - A manifest load failure skips field and icon checks, nothing else.
//! - Empty icon files are fatal; empty checklist files are warnings only.
//! - The validator never writes to the project tree.

use crate::checklist::{
    dev_files, required_files, required_manifest_fields, ChecklistEntry, DevFileEntry,
};
use crate::manifest::{load_manifest, ManifestDocument};
use crate::probe::{probe_file, FileProbe};
use crate::report::render_report;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Report section headings, emitted before each group of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Manifest,
    Icons,
    Structure,
    DevFiles,
}

/// Non-failure progress recorded during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Section(Section),
    /// A file that exists and is non-empty, with its size.
    FilePassed { path: String, size: u64 },
    /// A development file that exists.
    FileFound { path: String },
    ManifestChecked,
}

/// Result of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub progress: Vec<Progress>,
}

impl ValidationOutcome {
    /// True iff no fatal errors were recorded, regardless of warnings.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: String) {
        debug!("event=check module=validator status=error message={message}");
        self.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        debug!("event=check module=validator status=warn message={message}");
        self.warnings.push(message);
    }
}

/// Validates one extension project root.
#[derive(Debug, Clone)]
pub struct StructureValidator<'a> {
    root: PathBuf,
    required_fields: &'a [&'a str],
    required_files: &'a [ChecklistEntry],
    dev_files: &'a [DevFileEntry],
}

impl StructureValidator<'static> {
    /// Creates a validator using the default tables.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            required_fields: required_manifest_fields(),
            required_files: required_files(),
            dev_files: dev_files(),
        }
    }
}

impl<'a> StructureValidator<'a> {
    pub fn with_required_fields(mut self, fields: &'a [&'a str]) -> Self {
        self.required_fields = fields;
        self
    }

    pub fn with_required_files(mut self, files: &'a [ChecklistEntry]) -> Self {
        self.required_files = files;
        self
    }

    pub fn with_dev_files(mut self, files: &'a [DevFileEntry]) -> Self {
        self.dev_files = files;
        self
    }

    /// Runs every check and returns the accumulated outcome.
    ///
    /// # Side effects
    /// - Emits `validate` logging events with duration and counts.
    pub fn run(&self) -> ValidationOutcome {
        let started_at = Instant::now();
        info!(
            "event=validate module=validator status=start root={}",
            self.root.display()
        );

        let mut outcome = ValidationOutcome::default();
        self.check_manifest(&mut outcome);
        self.check_required_files(&mut outcome);
        self.check_dev_files(&mut outcome);

        let status = if outcome.is_success() { "ok" } else { "error" };
        info!(
            "event=validate module=validator status={status} duration_ms={} errors={} warnings={}",
            started_at.elapsed().as_millis(),
            outcome.errors.len(),
            outcome.warnings.len()
        );
        outcome
    }

    /// Runs every check, writes the report to `out` and returns the pass/fail signal.
    pub fn validate<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let outcome = self.run();
        out.write_all(render_report(&outcome).as_bytes())?;
        out.flush()?;
        Ok(outcome.is_success())
    }

    fn check_manifest(&self, outcome: &mut ValidationOutcome) {
        outcome.progress.push(Progress::Section(Section::Manifest));

        let manifest = match load_manifest(&self.root) {
            Ok(manifest) => manifest,
            Err(err) => {
                warn!("event=manifest_load module=validator status=error error={err}");
                outcome.error(err.to_string());
                return;
            }
        };

        let meta = manifest.metadata();
        debug!(
            "event=manifest_load module=validator status=ok name={:?} version={:?}",
            meta.name, meta.version
        );

        for field in manifest.missing_fields(self.required_fields) {
            outcome.error(format!("Missing required field in manifest: {field}"));
        }
        self.check_icons(&manifest, outcome);

        outcome.progress.push(Progress::ManifestChecked);
    }

    fn check_icons(&self, manifest: &ManifestDocument, outcome: &mut ValidationOutcome) {
        let icons = match manifest.icons() {
            Ok(Some(icons)) => icons,
            Ok(None) => return,
            Err(err) => {
                outcome.progress.push(Progress::Section(Section::Icons));
                outcome.error(err.to_string());
                return;
            }
        };

        outcome.progress.push(Progress::Section(Section::Icons));
        for icon in icons {
            // An empty path would resolve to the root directory itself.
            let probe = if icon.path.trim().is_empty() {
                FileProbe::Missing
            } else {
                probe_file(&self.root.join(&icon.path))
            };
            match probe {
                FileProbe::Missing => {
                    outcome.error(format!("Icon file not found: {}", icon.path));
                }
                FileProbe::Empty => {
                    outcome.error(format!("Icon file is empty: {}", icon.path));
                }
                FileProbe::Present { size } => outcome.progress.push(Progress::FilePassed {
                    path: icon.path,
                    size,
                }),
            }
        }
    }

    fn check_required_files(&self, outcome: &mut ValidationOutcome) {
        outcome.progress.push(Progress::Section(Section::Structure));

        for entry in self.required_files {
            match probe_file(&self.root.join(entry.path)) {
                FileProbe::Missing => {
                    outcome.error(format!("Missing {}: {}", entry.description, entry.path));
                }
                FileProbe::Empty => outcome.warning(format!("Empty file: {}", entry.path)),
                FileProbe::Present { size } => outcome.progress.push(Progress::FilePassed {
                    path: entry.path.to_string(),
                    size,
                }),
            }
        }
    }

    fn check_dev_files(&self, outcome: &mut ValidationOutcome) {
        outcome.progress.push(Progress::Section(Section::DevFiles));

        for entry in self.dev_files {
            if probe_file(&self.root.join(entry.path)).exists() {
                outcome.progress.push(Progress::FileFound {
                    path: entry.path.to_string(),
                });
            } else {
                outcome.warning(entry.missing_warning.to_string());
            }
        }
    }
}
