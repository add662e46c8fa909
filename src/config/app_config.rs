use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::sinks::OutputFormat;
use crate::core::errors::{ExportError, Result};

/// Namespace used when neither the CLI nor the config names one.
pub const DEFAULT_PREFIX: &str = "browser/";

/// Optional configuration read from `config.toml`.
///
/// Every setting can also be given on the command line, which wins.
///
/// ```toml
/// [export]
/// prefix = "browser/"
/// format = "csv"
/// revision = "latest"
/// skip_errors = false
///
/// [gopass]
/// binary = "/usr/local/bin/gopass"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub gopass: GopassSection,
}

impl AppConfig {
    /// Load the configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| ExportError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Parse TOML content and validate it.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;

        if config.export.prefix.as_deref() == Some("") {
            return Err("export.prefix must not be empty".into());
        }

        Ok(config)
    }

    /// Load `explicit` if given, else the per-user file if it exists,
    /// else an empty configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/passexport/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("passexport").join("config.toml"))
    }
}

/// The `[export]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportSection {
    pub prefix: Option<String>,
    pub format: Option<OutputFormat>,
    pub revision: Option<String>,
    pub skip_errors: Option<bool>,
}

/// The `[gopass]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GopassSection {
    /// Path to the gopass binary.
    pub binary: Option<PathBuf>,
}
