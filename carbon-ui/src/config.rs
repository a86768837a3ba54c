//! Estimator configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every key is optional:
//!
//! ```toml
//! processing_delay_ms = 3000
//! log_level = "info"
//! log_file = "estimator.log"
//! log_console = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use carbon_core::SessionConfig;
use carbon_core::wizard::session::DEFAULT_PROCESSING_DELAY;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Length of the simulated model generation, in milliseconds.
    pub processing_delay_ms: u64,
    /// Any `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub log_level: String,
    /// Appends log records to this file when set.
    pub log_file: Option<PathBuf>,
    /// Writes log records to stderr.
    pub log_console: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY.as_millis() as u64,
            log_level: "info".to_string(),
            log_file: None,
            log_console: true,
        }
    }
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub processing_delay_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

impl EstimatorConfig {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `path` when given, otherwise starts from the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(
        mut self,
        overrides: ConfigOverrides,
    ) -> Self {
        if let Some(delay) = overrides.processing_delay_ms {
            self.processing_delay_ms = delay;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        if overrides.quiet {
            self.log_console = false;
        }
        self
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            processing_delay: Duration::from_millis(self.processing_delay_ms),
        }
    }
}
