//! Consolidated text document (`llms.txt`).
//!
//! Flattens the whole content tree into one plain-text document, in manifest
//! order, for consumption by language models and other readers that have no
//! navigation to fall back on.
//!
//! ## Document Shape
//!
//! ```text
//! ---
//! title: CloudAgent Documentation
//! description: ...
//! generated_at: 2026-10-18T09:30:00.000Z
//! ---
//!
//! # CloudAgent Documentation
//!
//! <intro>
//!
//! ---
//!
//!
//! # Guide                ← directory entry: heading, then its children
//!
//!
//! # Guide Home           ← file entry: heading, blank line, cleaned body
//!
//! Welcome to the guide.
//! ```
//!
//! ## Cleaning
//!
//! Page sources are MDX. [`clean_content`] drops `import`/`export` lines,
//! turns `<Callout>` blocks into `> **Note:**` quotes, and squeezes runs of
//! blank lines, so the text reads as plain markdown.

use crate::config::DocumentConfig;
use crate::walk::{self, EntryKind, WalkError};
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("IO error reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^import\s+.*$").expect("import regex is valid"));
static EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^export\s+.*$").expect("export regex is valid"));
static CALLOUT_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Callout.*?>").expect("callout regex is valid"));
static EXCESS_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline regex is valid"));

const CALLOUT_CLOSE: &str = "</Callout>";
const NOTE_PREFIX: &str = "> **Note:** ";

/// The flattened document plus counts for the run summary.
#[derive(Debug, Clone)]
pub struct FlattenedDocument {
    pub text: String,
    /// Content files included.
    pub files: usize,
    /// Directory sections entered.
    pub sections: usize,
}

#[derive(Debug, Default)]
struct Counts {
    files: usize,
    sections: usize,
}

/// Strip MDX-only syntax from a page body.
///
/// Lines are blanked rather than removed, so the blank-line squeeze that
/// follows also absorbs the gaps they leave.
pub fn clean_content(raw: &str) -> String {
    let text = IMPORT_RE.replace_all(raw, "");
    let text = EXPORT_RE.replace_all(&text, "");
    let text = CALLOUT_OPEN_RE.replace_all(&text, NOTE_PREFIX);
    let text = text.replace(CALLOUT_CLOSE, "");
    EXCESS_NEWLINES_RE
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}

/// Render the front-matter header that opens the document.
pub fn render_header(doc: &DocumentConfig, generated_at: DateTime<Utc>) -> String {
    format!(
        "---\n\
         title: {title}\n\
         description: {description}\n\
         generated_at: {timestamp}\n\
         ---\n\
         \n\
         # {title}\n\
         \n\
         {intro}\n\
         \n\
         ---\n\
         \n",
        title = doc.title,
        description = doc.description,
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        intro = doc.intro,
    )
}

/// Flatten the tree under `dir` without the header.
pub fn flatten_directory(dir: &Path) -> Result<String, FlattenError> {
    let mut out = String::new();
    flatten_into(dir, &mut out, &mut Counts::default())?;
    Ok(out)
}

/// Build the complete document for the tree rooted at `content_dir`.
pub fn build_document(
    content_dir: &Path,
    doc: &DocumentConfig,
    generated_at: DateTime<Utc>,
) -> Result<FlattenedDocument, FlattenError> {
    let mut text = render_header(doc, generated_at);
    let mut counts = Counts::default();
    flatten_into(content_dir, &mut text, &mut counts)?;
    Ok(FlattenedDocument {
        text,
        files: counts.files,
        sections: counts.sections,
    })
}

fn flatten_into(dir: &Path, out: &mut String, counts: &mut Counts) -> Result<(), FlattenError> {
    for entry in walk::walk_directory(dir)? {
        match &entry.kind {
            EntryKind::File(path) => {
                let raw = fs::read_to_string(path).map_err(|source| FlattenError::Read {
                    path: path.clone(),
                    source,
                })?;
                out.push_str("\n\n# ");
                out.push_str(&entry.title);
                out.push_str("\n\n");
                out.push_str(&clean_content(&raw));
                counts.files += 1;
            }
            EntryKind::Directory(sub) => {
                out.push_str("\n\n# ");
                out.push_str(&entry.title);
                out.push('\n');
                counts.sections += 1;
                flatten_into(sub, out, counts)?;
            }
            EntryKind::Link { .. } => {}
        }
    }
    Ok(())
}
