//! Generator configuration.
//!
//! Handles loading, validating, and overriding `docsmith.toml`. Stock defaults
//! describe the CloudAgent docs site; a config file in the project root only
//! needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! project/
//! ├── docsmith.toml        # Optional, overrides stock defaults
//! ├── pages/               # content_root
//! │   ├── _meta.json
//! │   └── ...
//! └── public/              # output_dir
//!     ├── llms.txt
//!     └── sitemap.xml
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "pages"    # Content tree, relative to the project root
//! output_dir = "public"     # Artifact directory, relative to the project root
//! llms_file = "llms.txt"
//! sitemap_file = "sitemap.xml"
//!
//! [site]
//! url = "https://docs.cloudagent.io"   # Overridden by DOCS_SITE_URL
//! change_freq = "daily"                # always|hourly|daily|weekly|monthly|yearly|never
//!
//! [document]
//! title = "CloudAgent Documentation"
//! description = "Consolidated documentation for CloudAgent, optimized for LLM consumption."
//! intro = "..."
//! ```
//!
//! ## Environment
//!
//! `DOCS_SITE_URL` replaces `site.url` when set and non-empty. It is applied
//! after the file, so deploy pipelines can retarget the sitemap without
//! editing the config.
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::ChangeFreq;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "docsmith.toml";

/// Environment variable that overrides `site.url`.
pub const SITE_URL_ENV: &str = "DOCS_SITE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `docsmith.toml`.
///
/// Built once at the entry point and passed by reference into every
/// generator; nothing reads configuration from globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Root of the content tree, relative to the project root.
    pub content_root: String,
    /// Directory receiving both artifacts, relative to the project root.
    pub output_dir: String,
    /// File name of the consolidated text document.
    pub llms_file: String,
    /// File name of the sitemap.
    pub sitemap_file: String,
    /// Public site settings used by the sitemap.
    pub site: SiteSettings,
    /// Header of the consolidated text document.
    pub document: DocumentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "pages".to_string(),
            output_dir: "public".to_string(),
            llms_file: "llms.txt".to_string(),
            sitemap_file: "sitemap.xml".to_string(),
            site: SiteSettings::default(),
            document: DocumentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.site.url.starts_with("http://") || self.site.url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "site.url must be an absolute http(s) URL, got '{}'",
                self.site.url
            )));
        }
        if self.llms_file.trim().is_empty() || self.sitemap_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "llms_file and sitemap_file must not be empty".into(),
            ));
        }
        if self.document.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "document.title must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Absolute content directory for a project rooted at `root`.
    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.content_root)
    }

    /// Destination of the consolidated text document.
    pub fn llms_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.llms_file)
    }

    /// Destination of the sitemap.
    pub fn sitemap_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.sitemap_file)
    }
}

/// Public site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Base URL prepended to every sitemap path.
    pub url: String,
    /// `<changefreq>` applied uniformly to every page.
    pub change_freq: ChangeFreq,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            url: "https://docs.cloudagent.io".to_string(),
            change_freq: ChangeFreq::Daily,
        }
    }
}

/// Header block of the consolidated text document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    pub title: String,
    pub description: String,
    /// Paragraph printed under the title heading.
    pub intro: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "CloudAgent Documentation".to_string(),
            description:
                "Consolidated documentation for CloudAgent, optimized for LLM consumption."
                    .to_string(),
            intro: "This is a consolidated version of the CloudAgent documentation.\n\
                    It includes the User Guide, Cookbooks, and other resources."
                .to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    Ok(config)
}

/// Apply environment overrides through `lookup`.
///
/// Takes a lookup function instead of reading the process environment so
/// callers (and tests) decide where variables come from.
pub fn apply_env_overrides<F>(mut config: SiteConfig, lookup: F) -> SiteConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(SITE_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.site.url = url.trim().to_string();
    }
    config
}

/// Load config from `config_path` (or stock defaults if it does not exist),
/// apply environment overrides, and validate the result.
pub fn load_config(config_path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(config_path)?;
    let config = resolve_config(overlay)?;
    let config = apply_env_overrides(config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `docsmith.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docsmith Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Content tree root, relative to the project root. Every directory that
# should be published needs a _meta.json listing its entries in order.
content_root = "pages"

# Directory receiving the generated artifacts.
output_dir = "public"

# File names of the generated artifacts inside output_dir.
llms_file = "llms.txt"
sitemap_file = "sitemap.xml"

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Base URL prepended to every sitemap path.
# The DOCS_SITE_URL environment variable overrides this value.
url = "https://docs.cloudagent.io"

# Sitemap <changefreq> for every page.
# One of: always, hourly, daily, weekly, monthly, yearly, never.
change_freq = "daily"

# ---------------------------------------------------------------------------
# Consolidated text document header
# ---------------------------------------------------------------------------
[document]
title = "CloudAgent Documentation"
description = "Consolidated documentation for CloudAgent, optimized for LLM consumption."
intro = """This is a consolidated version of the CloudAgent documentation.
It includes the User Guide, Cookbooks, and other resources."""
"##
}
