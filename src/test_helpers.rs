//! Shared test utilities for the docsmith test suite.
//!
//! Provides fixture setup, small tree builders, and lookups over sitemap
//! results.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let pages = collect_pages(tmp.path(), "", ChangeFreq::Daily).unwrap();
//!
//! let setup = find_page(&pages, "/guide/setup");
//! assert_eq!(setup.priority, Priority::Page);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::naming::MANIFEST_FILE;
use crate::types::PageDescriptor;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Tree builders
// =========================================================================

/// Write `_meta.json` into `dir`, creating the directory if needed.
pub fn write_meta(dir: &Path, json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(MANIFEST_FILE), json).unwrap();
}

/// Write a content file named `file_name` into `dir`.
pub fn write_page(dir: &Path, file_name: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file_name), body).unwrap();
}

/// The two-level tree used throughout the docs:
///
/// ```text
/// _meta.json          {"guide": "Guide"}
/// guide/
///   _meta.json        {"index": "Guide Home", "setup": "Setup"}
///   index.mdx
///   setup.mdx
/// ```
pub fn guide_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_meta(tmp.path(), r#"{"guide": "Guide"}"#);
    let guide = tmp.path().join("guide");
    write_meta(&guide, r#"{"index": "Guide Home", "setup": "Setup"}"#);
    write_page(&guide, "index.mdx", "Welcome to the guide.");
    write_page(&guide, "setup.mdx", "Install the agent.");
    tmp
}

// =========================================================================
// Sitemap lookups. Each panics with a clear message on miss.
// =========================================================================

/// Find a page descriptor by URL. Panics if not found.
pub fn find_page<'a>(pages: &'a [PageDescriptor], url: &str) -> &'a PageDescriptor {
    pages.iter().find(|p| p.url == url).unwrap_or_else(|| {
        let urls = page_urls(pages);
        panic!("page '{url}' not found. Available: {urls:?}")
    })
}

/// All page URLs in sequence order.
pub fn page_urls(pages: &[PageDescriptor]) -> Vec<&str> {
    pages.iter().map(|p| p.url.as_str()).collect()
}

/// Byte offset of `needle` in `haystack`. Panics if absent.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
}
