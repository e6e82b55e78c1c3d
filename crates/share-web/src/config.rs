//! Read share.toml for the site header and the list of share targets.
//!
//! A copy ships in `data/share.toml` and is embedded at compile time, so the
//! site still renders when `$DATA_DIR/share.toml` is missing.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::share::ShareData;

/// Built-in config, used when no file is found on disk.
static BUILTIN: &str = include_str!("../data/share.toml");

const DEFAULT_NAME: &str = "share-web";

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileConfig {
    site: SiteSection,
    #[serde(default)]
    targets: Vec<ShareTarget>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    name: String,
    #[serde(default)]
    tagline: String,
}

// ── Public config ─────────────────────────────────────────────────────────────

/// One shareable entry on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTarget {
    /// HTML anchor for the section, unique within the file.
    pub id: String,
    pub heading: String,
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareTarget {
    pub fn payload(&self) -> ShareData {
        ShareData::new(self.title.clone(), self.text.clone(), self.url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub targets: Vec<ShareTarget>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            tagline: String::new(),
            targets: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).context("Failed to parse share config")?;

        let mut seen = HashSet::new();
        for target in &file.targets {
            if target.id.trim().is_empty() {
                bail!("Share target {:?} has an empty id", target.heading);
            }
            if !seen.insert(target.id.as_str()) {
                bail!("Duplicate share target id: {}", target.id);
            }
        }

        Ok(Self {
            name: file.site.name,
            tagline: file.site.tagline,
            targets: file.targets,
        })
    }

    /// Load config from a TOML file (typically `$DATA_DIR/share.toml`).
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// The config embedded from `data/share.toml`.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN).context("Built-in share config is invalid")
    }

    /// `$data_dir/share.toml`, or the built-in config if that file is
    /// missing or unreadable.
    #[cfg(feature = "ssr")]
    pub fn load_or_default(data_dir: &str) -> Self {
        let path = Path::new(data_dir).join("share.toml");
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("[config] {:#}; using built-in config", e),
            }
        }

        Self::builtin().unwrap_or_else(|e| {
            tracing::error!("[config] {:#}", e);
            Self::default()
        })
    }
}

/// Directory holding `share.toml`, from `DATA_DIR` (default `./data`).
pub fn data_dir() -> String {
    std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string())
}
