//! CLI output formatting for the generators.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Diagnostics (warnings about
//! dangling manifest entries, debug traces) go through `tracing` to stderr
//! and are not part of this output.
//!
//! # Output Format
//!
//! ## llms
//!
//! ```text
//! Flattened 12 pages in 3 sections (48213 bytes)
//! Generated public/llms.txt
//! ```
//!
//! ## sitemap
//!
//! ```text
//! Site URL: https://docs.cloudagent.io
//! Change frequency: daily
//!
//! Pages
//!     /                                        (priority: 1.0, lastmod: 2026-10-18)
//!     /guide                                   (priority: 0.9, lastmod: 2026-10-17)
//!     /guide/setup                             (priority: 0.8, lastmod: 2026-10-12)
//!
//! Generated public/sitemap.xml
//! Total pages: 3
//! ```

use crate::generate::{CheckReport, LlmsReport, SitemapReport};
use crate::types::{ChangeFreq, PageDescriptor};

/// Width the URL column is padded to in page listings.
const URL_COLUMN: usize = 40;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// One page line: padded URL, then priority and lastmod.
fn page_line(page: &PageDescriptor) -> String {
    format!(
        "{}{:<width$} (priority: {}, lastmod: {})",
        indent(1),
        page.url,
        page.priority,
        page.lastmod.format("%Y-%m-%d"),
        width = URL_COLUMN
    )
}

// ============================================================================
// llms
// ============================================================================

pub fn format_llms_output(report: &LlmsReport) -> Vec<String> {
    vec![
        format!(
            "Flattened {} in {} ({} bytes)",
            plural(report.files, "page", "pages"),
            plural(report.sections, "section", "sections"),
            report.bytes
        ),
        format!("Generated {}", report.output.display()),
    ]
}

pub fn print_llms_output(report: &LlmsReport) {
    for line in format_llms_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// sitemap
// ============================================================================

pub fn format_sitemap_output(report: &SitemapReport, changefreq: ChangeFreq) -> Vec<String> {
    let mut lines = vec![
        format!("Site URL: {}", report.site_url),
        format!("Change frequency: {}", changefreq),
        String::new(),
        "Pages".to_string(),
    ];
    lines.extend(report.pages.iter().map(page_line));
    lines.push(String::new());
    lines.push(format!("Generated {}", report.output.display()));
    lines.push(format!("Total pages: {}", report.pages.len()));
    lines
}

pub fn print_sitemap_output(report: &SitemapReport, changefreq: ChangeFreq) {
    for line in format_sitemap_output(report, changefreq) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    vec![
        format!("Content: {}", report.content_dir.display()),
        format!(
            "{}{} in {}",
            indent(1),
            plural(report.files, "page", "pages"),
            plural(report.sections, "section", "sections")
        ),
        format!(
            "{}{} in sitemap",
            indent(1),
            plural(report.pages, "URL", "URLs")
        ),
    ]
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
