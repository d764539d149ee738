use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File the demo binaries look for in the working directory.
pub const CONFIG_FILE: &str = "patterns.toml";

/// Shared settings for the demo binaries.
///
/// Every field has a default, so an empty file (or no file) is valid:
///
/// ```toml
/// placeholder = "-"
/// log_filter = "design_patterns=debug"
/// indent = 4
/// colored = false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Rendered in place of absent optional record fields.
    pub placeholder: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Indent step for nested composite output.
    pub indent: usize,
    /// Colorize section banners.
    pub colored: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            placeholder: crate::creational::builder::PLACEHOLDER.to_string(),
            log_filter: "warn".to_string(),
            indent: 2,
            colored: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(PatternError::ConfigIo { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }
}
