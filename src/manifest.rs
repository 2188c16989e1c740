//! Per-directory `_meta.json` manifests.
//!
//! A manifest is a JSON object whose key order is significant: it is the
//! order pages appear in both the flattened document and the sitemap.
//!
//! ```json
//! {
//!   "index": "Introduction",
//!   "guide": "User Guide",
//!   "---": { "type": "separator" },
//!   "cookbooks": { "title": "Cookbooks" },
//!   "github": { "title": "GitHub", "href": "https://github.com/example" },
//!   "llms": { "title": "LLM Export", "href": "/llms.txt" }
//! }
//! ```
//!
//! Values come in two shapes: a plain title string, or an object carrying a
//! `title` and optionally `type` and `href`. Both shapes are resolved into
//! [`Entry`] once, here, so the rest of the crate never branches on JSON
//! shape. Fields the site theme understands (`display`, `theme`, ...) are
//! ignored.

use crate::naming::{MANIFEST_FILE, SEPARATOR_KEY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed manifest {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Manifest {0} is not a JSON object")]
    NotAnObject(PathBuf),
    #[error("Manifest {path}: entry '{key}' must be a string or an object")]
    InvalidEntry { path: PathBuf, key: String },
}

/// One resolved manifest value.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// `"key": "Title"` shorthand.
    Title(String),
    /// `{ "title": ... }` without an href.
    TitledRef { title: String },
    /// `{ "title": ..., "href": ... }`.
    Linked { title: String, href: String },
    /// The `---` key or `{ "type": "separator" }`.
    Separator,
}

impl Entry {
    /// Display title, `None` for separators.
    pub fn title(&self) -> Option<&str> {
        match self {
            Entry::Title(title)
            | Entry::TitledRef { title }
            | Entry::Linked { title, .. } => Some(title.as_str()),
            Entry::Separator => None,
        }
    }
}

/// Ordered entries of one directory's manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub entries: Vec<(String, Entry)>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, entry)` pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

/// Structured entry as written in JSON.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    href: Option<String>,
}

/// Read `_meta.json` from `dir`.
///
/// Returns `Ok(None)` when the directory has no manifest. A manifest that
/// exists but does not parse is an error: continuing would silently drop or
/// misorder pages.
pub fn read_manifest(dir: &Path) -> Result<Option<Manifest>, ManifestError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest = parse_manifest(&content, &path)?;
    tracing::debug!(path = %path.display(), entries = manifest.len(), "loaded manifest");
    Ok(Some(manifest))
}

/// Parse manifest text. `path` is only used in error messages.
pub fn parse_manifest(content: &str, path: &Path) -> Result<Manifest, ManifestError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let serde_json::Value::Object(map) = value else {
        return Err(ManifestError::NotAnObject(path.to_path_buf()));
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let entry = resolve_entry(&key, value).ok_or_else(|| ManifestError::InvalidEntry {
            path: path.to_path_buf(),
            key: key.clone(),
        })?;
        entries.push((key, entry));
    }
    Ok(Manifest { entries })
}

/// Resolve one JSON value into an [`Entry`]. `None` if the shape is wrong.
fn resolve_entry(key: &str, value: serde_json::Value) -> Option<Entry> {
    if key == SEPARATOR_KEY {
        return Some(Entry::Separator);
    }
    match value {
        serde_json::Value::String(title) => Some(Entry::Title(title)),
        serde_json::Value::Object(_) => {
            let raw: RawEntry = serde_json::from_value(value).ok()?;
            if raw.kind.as_deref() == Some("separator") {
                return Some(Entry::Separator);
            }
            // An object without a title still names a page; its key stands in.
            let title = raw.title.unwrap_or_else(|| key.to_string());
            Some(match raw.href {
                Some(href) => Entry::Linked { title, href },
                None => Entry::TitledRef { title },
            })
        }
        _ => None,
    }
}
