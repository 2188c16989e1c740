//! Manifest-driven classification of one directory level.
//!
//! Both generators walk the content tree through [`walk_directory`]. It reads
//! the directory's manifest and resolves every entry, in manifest order, to
//! one of:
//!
//! - **File**: `<key>.mdx` or `<key>.md` exists
//! - **Directory**: `<key>/` is a real directory (not a symlink) and no
//!   content file shadows it
//! - **Link**: an `href` pointing off-site or at a raw export (`/llms.txt`)
//!
//! Separators are dropped. Keys that match nothing on disk are dropped with a
//! warning. The walker never recurses; each consumer decides what to do with
//! [`EntryKind::Directory`]. Sharing this one function is what keeps
//! `llms.txt` and `sitemap.xml` describing the same set of pages.

use crate::manifest::{self, Entry, ManifestError};
use crate::naming::{CONTENT_EXTENSIONS, is_off_tree_href};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// A manifest entry resolved against the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub key: String,
    pub title: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// Content file to read.
    File(PathBuf),
    /// Subdirectory to recurse into.
    Directory(PathBuf),
    /// Navigation-only link; never expanded by either generator.
    Link { href: String },
}

/// Resolve the entries of `dir` in manifest order.
///
/// A directory without `_meta.json` resolves to no entries.
pub fn walk_directory(dir: &Path) -> Result<Vec<ResolvedEntry>, WalkError> {
    let Some(manifest) = manifest::read_manifest(dir)? else {
        tracing::debug!(dir = %dir.display(), "no manifest, skipping directory");
        return Ok(Vec::new());
    };

    let mut resolved = Vec::with_capacity(manifest.len());
    for (key, entry) in manifest.iter() {
        if let Some(r) = resolve(dir, key, entry) {
            resolved.push(r);
        }
    }
    Ok(resolved)
}

fn resolve(dir: &Path, key: &str, entry: &Entry) -> Option<ResolvedEntry> {
    let title = entry.title()?.to_string();

    if let Entry::Linked { href, .. } = entry
        && is_off_tree_href(href)
    {
        return Some(ResolvedEntry {
            key: key.to_string(),
            title,
            kind: EntryKind::Link { href: href.clone() },
        });
    }

    let kind = if let Some(file) = content_file(dir, key) {
        EntryKind::File(file)
    } else {
        let sub = dir.join(key);
        if is_real_dir(&sub) {
            EntryKind::Directory(sub)
        } else {
            tracing::warn!(
                key,
                dir = %dir.display(),
                "manifest entry matches no content file or directory; skipping"
            );
            return None;
        }
    };

    Some(ResolvedEntry {
        key: key.to_string(),
        title,
        kind,
    })
}

/// Symlinked directories are not followed; a key naming one is dangling.
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

/// Find the content file for `key`, preferring `.mdx` over `.md`.
pub fn content_file(dir: &Path, key: &str) -> Option<PathBuf> {
    CONTENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{key}.{ext}")))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{write_meta, write_page};
    use tempfile::TempDir;

    fn keys(entries: &[ResolvedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn entries_follow_manifest_order() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), r#"{"zeta": "Z", "alpha": "A"}"#);
        write_page(tmp.path(), "alpha.mdx", "a");
        write_page(tmp.path(), "zeta.mdx", "z");

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(keys(&entries), vec!["zeta", "alpha"]);
    }

    #[test]
    fn file_and_directory_classified() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), r#"{"index": "Home", "guide": "Guide"}"#);
        write_page(tmp.path(), "index.mdx", "home");
        fs::create_dir(tmp.path().join("guide")).unwrap();

        let entries = walk_directory(tmp.path()).unwrap();
        assert!(matches!(entries[0].kind, EntryKind::File(_)));
        assert!(matches!(entries[1].kind, EntryKind::Directory(_)));
        assert_eq!(entries[1].title, "Guide");
    }

    #[test]
    fn md_used_when_no_mdx() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), r#"{"notes": "Notes"}"#);
        write_page(tmp.path(), "notes.md", "n");

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(entries[0].kind, EntryKind::File(tmp.path().join("notes.md")));
    }

    #[test]
    fn mdx_preferred_over_md() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "notes.md", "plain");
        write_page(tmp.path(), "notes.mdx", "rich");
        assert_eq!(
            content_file(tmp.path(), "notes"),
            Some(tmp.path().join("notes.mdx"))
        );
    }

    #[test]
    fn file_wins_over_directory() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), r#"{"guide": "Guide"}"#);
        write_page(tmp.path(), "guide.mdx", "g");
        fs::create_dir(tmp.path().join("guide")).unwrap();

        let entries = walk_directory(tmp.path()).unwrap();
        assert!(matches!(entries[0].kind, EntryKind::File(_)));
    }

    #[test]
    fn separators_dropped() {
        let tmp = TempDir::new().unwrap();
        write_meta(
            tmp.path(),
            r#"{"a": "A", "---": "", "extras": {"type": "separator", "title": "Extras"}, "b": "B"}"#,
        );
        write_page(tmp.path(), "a.mdx", "a");
        write_page(tmp.path(), "b.mdx", "b");
        // Even a file matching a separator key is not picked up.
        write_page(tmp.path(), "extras.mdx", "x");

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(keys(&entries), vec!["a", "b"]);
    }

    #[test]
    fn dangling_entry_skipped() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), r#"{"a": "A", "ghost": "Ghost", "b": "B"}"#);
        write_page(tmp.path(), "a.mdx", "a");
        write_page(tmp.path(), "b.mdx", "b");

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(keys(&entries), vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_dangling() {
        let tmp = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        write_meta(real.path(), r#"{"a": "A"}"#);
        write_page(real.path(), "a.mdx", "a");
        write_meta(tmp.path(), r#"{"page": "Page", "linked": "Linked"}"#);
        write_page(tmp.path(), "page.mdx", "p");
        std::os::unix::fs::symlink(real.path(), tmp.path().join("linked")).unwrap();

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(keys(&entries), vec!["page"]);
    }

    #[test]
    fn external_and_export_links_classified_as_links() {
        let tmp = TempDir::new().unwrap();
        write_meta(
            tmp.path(),
            r#"{
                "github": {"title": "GitHub", "href": "https://github.com/example"},
                "llms": {"title": "LLM Export", "href": "/llms.txt"}
            }"#,
        );
        // A stray file under the link key does not turn it into a page.
        write_page(tmp.path(), "llms.mdx", "x");

        let entries = walk_directory(tmp.path()).unwrap();
        assert_eq!(
            entries[0].kind,
            EntryKind::Link {
                href: "https://github.com/example".into()
            }
        );
        assert!(matches!(entries[1].kind, EntryKind::Link { .. }));
    }

    #[test]
    fn internal_href_resolves_by_key() {
        let tmp = TempDir::new().unwrap();
        write_meta(
            tmp.path(),
            r#"{"setup": {"title": "Setup", "href": "/guide/setup"}}"#,
        );
        write_page(tmp.path(), "setup.mdx", "s");

        let entries = walk_directory(tmp.path()).unwrap();
        assert!(matches!(entries[0].kind, EntryKind::File(_)));
        assert_eq!(entries[0].title, "Setup");
    }

    #[test]
    fn no_manifest_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "orphan.mdx", "o");
        assert!(walk_directory(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn malformed_manifest_propagates() {
        let tmp = TempDir::new().unwrap();
        write_meta(tmp.path(), "{ oops");
        assert!(matches!(
            walk_directory(tmp.path()),
            Err(WalkError::Manifest(ManifestError::Json { .. }))
        ));
    }
}
