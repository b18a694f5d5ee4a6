//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! { "schema_files": ["widgets.json"], "trace": false }
//! ```
//!
//! Relative schema file paths resolve against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::schema::{self, SchemaCatalogue, SchemaError};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extra schema files loaded after the builtin widgets, in order
    #[serde(default)]
    pub schema_files: Vec<PathBuf>,

    /// Emit per-invocation TRACE logs
    #[serde(default)]
    pub trace: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        if let Some(base) = path.parent() {
            config.schema_files = config
                .schema_files
                .into_iter()
                .map(|p| if p.is_relative() { base.join(p) } else { p })
                .collect();
        }

        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("path", path.display().to_string().as_str()),
                ("schema_files", config.schema_files.len().to_string().as_str()),
            ],
        );

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(empty) = self.schema_files.iter().position(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "schema_files[{}] is an empty path",
                empty
            )));
        }
        Ok(())
    }

    /// Minimum log severity implied by this config
    pub fn log_severity(&self) -> Severity {
        if self.trace {
            Severity::Trace
        } else {
            Severity::Info
        }
    }

    /// Applies logging settings and builds the schema catalogue: builtin
    /// widgets first, then each configured file in order.
    pub fn build_catalogue(&self) -> ConfigResult<SchemaCatalogue> {
        Logger::set_min_severity(self.log_severity());

        let mut catalogue = SchemaCatalogue::with_builtin_widgets();
        for file in &self.schema_files {
            schema::load_file(&mut catalogue, file)?;
        }
        Ok(catalogue)
    }
}
