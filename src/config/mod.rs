//! Configuration for folio.
//!
//! Settings live in a `folio.toml` at the site root:
//!
//! ```toml
//! content-dir = "content/projects"
//! base-path = "/work"
//! placeholder-cover = "/placeholder.svg"
//! output = "json"  # or "human"
//! ```
//!
//! Every key is optional; a missing file means all defaults. Precedence for
//! the output format: CLI flag > folio.toml > default (json).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name, looked up at the site root.
pub const CONFIG_FILE: &str = "folio.toml";

/// Default content directory, relative to the site root.
pub const DEFAULT_CONTENT_DIR: &str = "content/projects";

/// Default base path for detail URLs.
pub const DEFAULT_BASE_PATH: &str = "/work";

/// Default cover image substituted when a document has none.
pub const DEFAULT_PLACEHOLDER_COVER: &str = "/placeholder.svg";

/// Output format preference for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output (default, machine-readable)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "human" => Some(OutputFormat::Human),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// On-disk schema for `folio.toml`. All keys optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    content_dir: Option<String>,
    base_path: Option<String>,
    placeholder_cover: Option<String>,
    output: Option<String>,
}

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    content_dir: PathBuf,
    base_path: String,
    placeholder_cover: String,
    output: OutputFormat,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            base_path: DEFAULT_BASE_PATH.to_string(),
            placeholder_cover: DEFAULT_PLACEHOLDER_COVER.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl FolioConfig {
    /// Load configuration for a site root.
    ///
    /// A missing `folio.toml` is fine (defaults); a malformed one is a
    /// configuration error, since silently ignoring it would mispoint the
    /// whole catalog.
    pub fn load(site_root: &Path) -> Result<Self> {
        let path = site_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML config string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("invalid {}: {}", CONFIG_FILE, e)))?;

        let output = match raw.output.as_deref() {
            Some(s) => OutputFormat::parse(s).ok_or_else(|| {
                Error::Config(format!("output must be \"json\" or \"human\", got \"{s}\""))
            })?,
            None => OutputFormat::default(),
        };

        let config = Self {
            content_dir: raw
                .content_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
            base_path: raw.base_path.unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            placeholder_cover: raw
                .placeholder_cover
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_COVER.to_string()),
            output,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the config values.
    pub fn validate(&self) -> Result<()> {
        if !self.base_path.starts_with('/') {
            return Err(Error::Config(format!(
                "base-path must start with '/', got \"{}\"",
                self.base_path
            )));
        }
        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(Error::Config(format!(
                "base-path must not end with '/', got \"{}\"",
                self.base_path
            )));
        }
        if self.content_dir.as_os_str().is_empty() {
            return Err(Error::Config("content-dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// The content directory resolved against the site root.
    pub fn content_dir_in(&self, site_root: &Path) -> PathBuf {
        if self.content_dir.is_absolute() {
            self.content_dir.clone()
        } else {
            site_root.join(&self.content_dir)
        }
    }

    /// Base path for detail URLs (no trailing slash).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Cover path substituted when a document has none.
    pub fn placeholder_cover(&self) -> &str {
        &self.placeholder_cover
    }

    /// Output format preference from the config file.
    pub fn output(&self) -> OutputFormat {
        self.output
    }
}
