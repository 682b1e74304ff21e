//! On-disk site configuration.
//!
//! Every field is optional; missing values fall back to environment
//! variables and built-in defaults when the configuration is resolved.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root of `aacbook.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub server: ServerSection,
    pub docs: DocsSection,
    pub slides: SlidesSection,
    pub contact: ContactSection,
    pub render: RenderSection,
}

/// `server:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    /// Listen address, e.g. `127.0.0.1:3000`.
    pub bind: Option<String>,
    /// Port for the Prometheus scrape endpoint.
    pub metrics_port: Option<u16>,
}

/// `docs:` section. At most one of `dir` and `url` may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsSection {
    pub dir: Option<PathBuf>,
    pub url: Option<String>,
    /// Request timeout for `url`, in humantime form (`10s`, `1m`).
    pub fetch_timeout: Option<String>,
    /// Show generated placeholder text when a chapter fails to load.
    pub placeholders: Option<bool>,
}

/// `slides:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlidesSection {
    pub path: Option<PathBuf>,
}

/// `contact:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactSection {
    /// Simulated submission delay, in humantime form.
    pub submit_delay: Option<String>,
}

/// `render:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    /// Prefix for relative link and image targets in chapter markdown.
    pub asset_base: Option<String>,
}
