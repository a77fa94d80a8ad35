//! Extension manifest loading and declaration-level queries.
//!
//! # Responsibility
//! - Read and parse `manifest.json` under a project root.
//! - Answer presence queries for required keys and the `icons` mapping.
//!
//! # Invariants
//! - Field checks are presence-only; value types are never validated.
//! - Icon order is document order.

use crate::checklist::{ICONS_KEY, MANIFEST_FILE};
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type ManifestResult<T> = Result<T, ManifestError>;

/// Parsed manifest object.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    // Always a `Value::Object`; enforced by `parse`.
    value: Value,
}

/// Loosely typed metadata view, used for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestMetadata {
    #[serde(default)]
    pub manifest_version: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub version: Option<Value>,
}

/// One `size -> path` icon declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub size: String,
    pub path: String,
}

impl ManifestDocument {
    /// Parses manifest text. The top level must be a JSON object.
    pub fn parse(raw: &str) -> ManifestResult<Self> {
        let value = serde_json::from_str::<Value>(raw)?;
        if !value.is_object() {
            return Err(ManifestError::NotAnObject);
        }
        Ok(Self { value })
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.value.get(key).is_some()
    }

    /// Returns the required keys absent from this document, in `required` order.
    pub fn missing_fields<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| !self.has_field(key))
            .collect()
    }

    /// Returns declared icons, or `Ok(None)` when the manifest has no `icons` key.
    ///
    /// # Errors
    /// - `IconsError::NotAnObject` when `icons` is not a JSON object.
    /// - `IconsError::NonStringPath` when an icon path is not a string.
    pub fn icons(&self) -> Result<Option<Vec<IconEntry>>, IconsError> {
        let raw = match self.value.get(ICONS_KEY) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let map = raw.as_object().ok_or(IconsError::NotAnObject)?;

        let mut entries = Vec::with_capacity(map.len());
        for (size, path) in map {
            let path = path
                .as_str()
                .ok_or_else(|| IconsError::NonStringPath(size.clone()))?;
            entries.push(IconEntry {
                size: size.clone(),
                path: path.to_string(),
            });
        }
        Ok(Some(entries))
    }

    pub fn metadata(&self) -> ManifestMetadata {
        ManifestMetadata::deserialize(&self.value).unwrap_or_default()
    }
}

/// Returns the manifest path under `root`.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Loads and parses `manifest.json` under `root`.
pub fn load_manifest(root: &Path) -> ManifestResult<ManifestDocument> {
    let path = manifest_path(root);
    if !path.exists() {
        return Err(ManifestError::NotFound(path));
    }
    let raw = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    ManifestDocument::parse(&raw)
}

/// Errors that disable every manifest-dependent check.
#[derive(Debug)]
pub enum ManifestError {
    NotFound(PathBuf),
    Read { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    NotAnObject,
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(_) => write!(f, "{MANIFEST_FILE} not found"),
            Self::Read { source, .. } => write!(f, "Failed to read {MANIFEST_FILE}: {source}"),
            Self::Parse(err) => write!(f, "Invalid JSON in {MANIFEST_FILE}: {err}"),
            Self::NotAnObject => write!(f, "{MANIFEST_FILE} must contain a JSON object"),
        }
    }
}

impl Error for ManifestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotFound(_) | Self::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Malformed `icons` declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconsError {
    NotAnObject,
    NonStringPath(String),
}

impl Display for IconsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "Manifest field `{ICONS_KEY}` must be an object"),
            Self::NonStringPath(size) => {
                write!(f, "Icon path for size {size} must be a string")
            }
        }
    }
}

impl Error for IconsError {}

#[cfg(test)]
mod tests {
    use super::{IconEntry, IconsError, ManifestDocument, ManifestError};

    #[test]
    fn parses_object_and_reports_missing_fields_in_order() {
        let doc = ManifestDocument::parse(r#"{"name": "demo"}"#).unwrap();
        assert_eq!(
            doc.missing_fields(&["manifest_version", "name", "version"]),
            vec!["manifest_version", "version"]
        );
    }

    #[test]
    fn presence_check_ignores_value_type() {
        let doc =
            ManifestDocument::parse(r#"{"manifest_version": null, "name": 7, "version": []}"#)
                .unwrap();
        assert!(doc
            .missing_fields(&["manifest_version", "name", "version"])
            .is_empty());
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = ManifestDocument::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject));
    }

    #[test]
    fn parse_error_keeps_diagnostic() {
        let err = ManifestDocument::parse("{\"name\": ").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON in manifest.json: "));
    }

    #[test]
    fn icons_follow_document_order() {
        let doc = ManifestDocument::parse(
            r#"{"icons": {"128": "icons/128.png", "16": "icons/16.png", "48": "icons/48.png"}}"#,
        )
        .unwrap();
        let sizes: Vec<String> = doc
            .icons()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|IconEntry { size, .. }| size)
            .collect();
        assert_eq!(sizes, vec!["128", "16", "48"]);
    }

    #[test]
    fn icons_absent_is_none() {
        let doc = ManifestDocument::parse("{}").unwrap();
        assert_eq!(doc.icons().unwrap(), None);
    }

    #[test]
    fn rejects_malformed_icons() {
        let doc = ManifestDocument::parse(r#"{"icons": ["a.png"]}"#).unwrap();
        assert_eq!(doc.icons().unwrap_err(), IconsError::NotAnObject);

        let doc = ManifestDocument::parse(r#"{"icons": {"16": 3}}"#).unwrap();
        assert_eq!(
            doc.icons().unwrap_err(),
            IconsError::NonStringPath("16".to_string())
        );
    }

    #[test]
    fn metadata_view_tolerates_missing_keys() {
        let doc = ManifestDocument::parse(r#"{"name": "demo", "version": "1.0"}"#).unwrap();
        let meta = doc.metadata();
        assert_eq!(meta.name, Some(serde_json::json!("demo")));
        assert_eq!(meta.manifest_version, None);
    }
}
