//! Blocking filesystem probes used by every file check.

use std::fs;
use std::path::Path;

/// Observed state of one path on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProbe {
    Missing,
    Empty,
    Present { size: u64 },
}

impl FileProbe {
    pub fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Probes `path` for existence and byte size.
///
/// Unreadable metadata counts as missing. Directories report their metadata
/// length, so an existing directory is never treated as missing.
pub fn probe_file(path: &Path) -> FileProbe {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => FileProbe::Empty,
        Ok(meta) => FileProbe::Present { size: meta.len() },
        Err(_) => FileProbe::Missing,
    }
}
