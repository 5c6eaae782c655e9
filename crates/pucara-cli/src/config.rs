//! # CLI Configuration
//!
//! Optional YAML file selecting defaults for the `validate` subcommand.
//! Looked up from `--config`, then the `PUCARA_CONFIG` environment
//! variable; with neither, built-in defaults apply.
//!
//! ```yaml
//! output: json
//! strict_shape: true
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use pucara_core::PucaraError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "PUCARA_CONFIG";

/// Report format for `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `input`, `valid|invalid`, canonical form.
    #[default]
    Text,
    /// Pretty-printed JSON array of reports.
    Json,
}

/// Settings loaded from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default report format when `--json` is not given.
    pub output: OutputFormat,
    /// Exit with code 2 instead of 1 when any input is not even shaped
    /// like a RUT, so batch jobs can tell typos from garbage.
    pub strict_shape: bool,
}

impl CliConfig {
    /// Resolve configuration from an explicit path or `PUCARA_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PucaraError> {
        Self::resolve_from(explicit, std::env::var_os(CONFIG_ENV_VAR))
    }

    fn resolve_from(explicit: Option<&Path>, env: Option<OsString>) -> Result<Self, PucaraError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from));
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, PucaraError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(text: &str) -> Result<Self, PucaraError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| PucaraError::Config(e.to_string()))
    }
}
