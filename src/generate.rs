//! Generator pipelines.
//!
//! Each pipeline walks the content tree from scratch, builds its artifact in
//! memory, and only then hands it to [`write_artifact`]. A bad manifest or an
//! unreadable page aborts before anything is written, so the previously
//! published file stays in place.
//!
//! ```text
//! llms:     content/ → walk → flatten  → render header + body → public/llms.txt
//! sitemap:  content/ → walk → collect  → sort → render XML    → public/sitemap.xml
//! check:    content/ → walk → flatten + collect (nothing written)
//! ```
//!
//! The two pipelines share no state and can run in separate processes.

use crate::config::SiteConfig;
use crate::flatten::{self, FlattenError};
use crate::sitemap::{self, SitemapError};
use crate::types::PageDescriptor;
use crate::write::{WriteError, write_artifact};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Content directory not found: {0}")]
    MissingContent(PathBuf),
    #[error(transparent)]
    Flatten(#[from] FlattenError),
    #[error(transparent)]
    Sitemap(#[from] SitemapError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result of a `llms` run.
#[derive(Debug)]
pub struct LlmsReport {
    pub output: PathBuf,
    pub files: usize,
    pub sections: usize,
    pub bytes: usize,
}

/// Result of a `sitemap` run. `pages` are in final (sorted) order.
#[derive(Debug)]
pub struct SitemapReport {
    pub output: PathBuf,
    pub site_url: String,
    pub pages: Vec<PageDescriptor>,
}

/// Result of a `check` run.
#[derive(Debug)]
pub struct CheckReport {
    pub content_dir: PathBuf,
    pub files: usize,
    pub sections: usize,
    pub pages: usize,
}

fn content_dir(root: &Path, config: &SiteConfig) -> Result<PathBuf, GenerateError> {
    let dir = config.content_dir(root);
    if !dir.is_dir() {
        return Err(GenerateError::MissingContent(dir));
    }
    Ok(dir)
}

/// Build and write the consolidated text document.
///
/// `generated_at` is stamped into the header; everything else depends only
/// on the content tree.
pub fn generate_llms(
    root: &Path,
    config: &SiteConfig,
    generated_at: DateTime<Utc>,
) -> Result<LlmsReport, GenerateError> {
    let dir = content_dir(root, config)?;
    let document = flatten::build_document(&dir, &config.document, generated_at)?;

    let output = config.llms_path(root);
    write_artifact(&output, &document.text)?;

    Ok(LlmsReport {
        output,
        files: document.files,
        sections: document.sections,
        bytes: document.text.len(),
    })
}

/// Collect, sort, render, and write the sitemap.
pub fn generate_sitemap(root: &Path, config: &SiteConfig) -> Result<SitemapReport, GenerateError> {
    let dir = content_dir(root, config)?;
    let mut pages = sitemap::collect_pages(&dir, "", config.site.change_freq)?;
    sitemap::sort_pages(&mut pages);
    let xml = sitemap::render_sitemap(&config.site.url, &pages);

    let output = config.sitemap_path(root);
    write_artifact(&output, &xml)?;

    Ok(SitemapReport {
        output,
        site_url: config.site.url.clone(),
        pages,
    })
}

/// Run both traversals without writing anything.
pub fn check(root: &Path, config: &SiteConfig) -> Result<CheckReport, GenerateError> {
    let dir = content_dir(root, config)?;
    let document = flatten::build_document(&dir, &config.document, Utc::now())?;
    let pages = sitemap::collect_pages(&dir, "", config.site.change_freq)?;

    Ok(CheckReport {
        content_dir: dir,
        files: document.files,
        sections: document.sections,
        pages: pages.len(),
    })
}
