//! Shared types for sitemap output and configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `<url>` record of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// Site-relative URL path: `/`, `/guide`, `/guide/setup`.
    pub url: String,
    /// Last modification date of the source file (UTC).
    pub lastmod: NaiveDate,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

/// Sitemap priority tier, assigned by a page's structural role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// The site root, `/`.
    Root,
    /// The `index` page of any other directory.
    Section,
    /// Everything else.
    Page,
}

impl Priority {
    /// Numeric weight as written to `<priority>`.
    pub fn weight(self) -> &'static str {
        match self {
            Priority::Root => "1.0",
            Priority::Section => "0.9",
            Priority::Page => "0.8",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.weight())
    }
}

/// `<changefreq>` values defined by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
