//! Centralized naming conventions for the content tree.
//!
//! Every directory level follows the same rules, and both generators must
//! agree on them, so they live in one place:
//!
//! - The per-directory manifest is always `_meta.json`.
//! - A manifest key of `---` is a separator and never resolves to content.
//! - A key of `index` names the page that represents its directory.
//! - A key resolves to a content file by appending `.mdx`, then `.md`.
//!
//! ## URL Paths
//!
//! URL paths are built from manifest keys, not from filesystem paths, so a
//! page's URL only depends on the keys along its branch:
//!
//! - `index` at the root → `/`
//! - `index` under `/guide` → `/guide`
//! - `setup` under `/guide` → `/guide/setup`

/// File name of the per-directory manifest.
pub const MANIFEST_FILE: &str = "_meta.json";

/// Manifest key reserved for separators.
pub const SEPARATOR_KEY: &str = "---";

/// Manifest key of the page that represents its directory.
pub const INDEX_KEY: &str = "index";

/// Content extensions, in resolution preference order.
pub const CONTENT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Resolve the URL path of a page keyed `key` inside a directory at `prefix`.
///
/// `prefix` is either empty (the content root) or a path like `/guide`
/// without a trailing slash.
pub fn page_url(prefix: &str, key: &str) -> String {
    if key == INDEX_KEY {
        if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        }
    } else {
        child_prefix(prefix, key)
    }
}

/// URL prefix for the subdirectory `key` inside a directory at `prefix`.
pub fn child_prefix(prefix: &str, key: &str) -> String {
    format!("{prefix}/{key}")
}

/// Whether an `href` leaves the page tree.
///
/// Absolute links (`http://`, `https://`) point off-site; `.txt` targets are
/// raw exports such as `/llms.txt`. Neither is a page of this site.
pub fn is_off_tree_href(href: &str) -> bool {
    href.starts_with("http") || href.ends_with(".txt")
}
