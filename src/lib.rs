//! # docsmith
//!
//! Build-time generators for a documentation site. A content tree whose order
//! and titles live in per-directory `_meta.json` manifests is flattened into
//! two artifacts:
//!
//! - `llms.txt`: the whole documentation as one plain-text document, for
//!   language models and other machine readers.
//! - `sitemap.xml`: every page with its last-modified date and priority, for
//!   search engines.
//!
//! # Architecture: One Walk, Two Projections
//!
//! ```text
//!                         ┌─► flatten  ─► llms.txt
//! pages/ ─► manifest ─► walk
//!                         └─► sitemap  ─► sitemap.xml
//! ```
//!
//! Both generators resolve entries through the same [`walk::walk_directory`].
//! Separators, links, and dangling keys are decided once, so the two
//! artifacts always describe the same set of pages in the same order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Reads `_meta.json` into ordered, typed [`manifest::Entry`] values |
//! | [`walk`] | Classifies one directory's entries as file, directory, or link |
//! | [`naming`] | Manifest file name, separator/index keys, URL joining, href rules |
//! | [`flatten`] | MDX cleanup and recursive text concatenation |
//! | [`sitemap`] | Page descriptors, priorities, sorting, and XML rendering |
//! | [`types`] | Shared sitemap types (`PageDescriptor`, `Priority`, `ChangeFreq`) |
//! | [`write`] | Atomic artifact persistence |
//! | [`generate`] | The `llms`, `sitemap`, and `check` pipelines |
//! | [`config`] | `docsmith.toml` loading, env overrides, validation |
//! | [`output`] | CLI summaries |
//!
//! # Design Decisions
//!
//! ## Manifest Order Is the Document
//!
//! Readers of `llms.txt` have no sidebar. The order of keys in `_meta.json` is
//! the only structure they get, so JSON objects are parsed with key order
//! preserved and entries are emitted strictly in that order.
//!
//! ## Tolerant of Dangling Keys, Strict About Syntax
//!
//! A manifest key with no matching file or directory is skipped with a
//! warning; the site theme tolerates the same thing, and half-written pages
//! should not block a build. A manifest that does not parse is fatal: the
//! generator cannot know what order was intended.
//!
//! ## All or Nothing
//!
//! Artifacts are built in memory and written with an atomic rename. A failed
//! run leaves the last good `llms.txt` and `sitemap.xml` untouched.

pub mod config;
pub mod flatten;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod sitemap;
pub mod types;
pub mod walk;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
