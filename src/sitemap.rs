//! Sitemap projection (`sitemap.xml`).
//!
//! Walks the same manifest-ordered tree as the text document, but keeps only
//! the pages: one [`PageDescriptor`] per content file, none for directories,
//! links, or separators.
//!
//! ## URLs and Priorities
//!
//! | Entry | URL | Priority |
//! |-------|-----|----------|
//! | `index` at the root | `/` | 1.0 (root) |
//! | `index` under `guide/` | `/guide` | 0.9 (section) |
//! | `setup` under `guide/` | `/guide/setup` | 0.8 (page) |
//!
//! `<lastmod>` is the source file's modification date in UTC. After the
//! walk, pages are sorted by URL (byte order) so the listing is stable no
//! matter how manifests order them.
//!
//! ## XML
//!
//! Rendered with [maud](https://maud.lambda.xyz/), which escapes every
//! interpolated value; a site URL or key containing `&` still produces a
//! well-formed document.

use crate::naming::{INDEX_KEY, child_prefix, page_url};
use crate::types::{ChangeFreq, PageDescriptor, Priority};
use crate::walk::{self, EntryKind, WalkError};
use chrono::{DateTime, NaiveDate, Utc};
use maud::{PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("Cannot read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority tier for a page at `url` keyed `key`.
pub fn priority_for(url: &str, key: &str) -> Priority {
    if url == "/" {
        Priority::Root
    } else if key == INDEX_KEY {
        Priority::Section
    } else {
        Priority::Page
    }
}

/// Collect page descriptors for the tree under `dir`, in traversal order.
///
/// `prefix` is the URL path of `dir`: empty for the content root.
pub fn collect_pages(
    dir: &Path,
    prefix: &str,
    changefreq: ChangeFreq,
) -> Result<Vec<PageDescriptor>, SitemapError> {
    let mut pages = Vec::new();
    collect_into(dir, prefix, changefreq, &mut pages)?;
    Ok(pages)
}

fn collect_into(
    dir: &Path,
    prefix: &str,
    changefreq: ChangeFreq,
    pages: &mut Vec<PageDescriptor>,
) -> Result<(), SitemapError> {
    for entry in walk::walk_directory(dir)? {
        match &entry.kind {
            EntryKind::File(path) => {
                let url = page_url(prefix, &entry.key);
                let priority = priority_for(&url, &entry.key);
                pages.push(PageDescriptor {
                    url,
                    lastmod: last_modified(path)?,
                    priority,
                    changefreq,
                });
            }
            EntryKind::Directory(sub) => {
                collect_into(sub, &child_prefix(prefix, &entry.key), changefreq, pages)?;
            }
            EntryKind::Link { .. } => {}
        }
    }
    Ok(())
}

/// Modification date of `path` as a UTC calendar date.
fn last_modified(path: &Path) -> Result<NaiveDate, SitemapError> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| SitemapError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DateTime::<Utc>::from(modified).date_naive())
}

/// Sort pages by URL, comparing bytes.
pub fn sort_pages(pages: &mut [PageDescriptor]) {
    pages.sort_by(|a, b| a.url.cmp(&b.url));
}

/// Join the site URL with a page path; the root page is the bare site URL.
pub fn absolute_url(site_url: &str, url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if url == "/" {
        base.to_string()
    } else {
        format!("{base}{url}")
    }
}

/// Render pages as a sitemap-protocol document. Pages are written in the
/// order given; call [`sort_pages`] first.
pub fn render_sitemap(site_url: &str, pages: &[PageDescriptor]) -> String {
    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        "\n"
        urlset xmlns=(SITEMAP_NS) {
            @for page in pages {
                "\n  "
                url {
                    "\n    "
                    loc { (absolute_url(site_url, &page.url)) }
                    "\n    "
                    lastmod { (page.lastmod.format("%Y-%m-%d").to_string()) }
                    "\n    "
                    changefreq { (page.changefreq.as_str()) }
                    "\n    "
                    priority { (page.priority.weight()) }
                    "\n  "
                }
            }
            "\n"
        }
        "\n"
    };
    markup.into_string()
}
