//! # Runtime Configuration
//!
//! Loaded from a TOML file, then overridden from the environment.
//!
//! ```toml
//! [ledger]
//! state_file = "ledger.bin"
//!
//! [logging]
//! level = "info"
//!
//! [repository]
//! list_strategy = "range_scan"   # or "predicate_query"
//!
//! [[authorization.peers]]
//! key = "org1-peer1"
//! subject_marker = "org1.example.com"
//! msp_id = "Org1MSP"
//!
//! [authorization.org_table]
//! "org1-peer1" = "Org1MSP"
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `DX_CONFIG` | Config file path (when none is given explicitly) |
//! | `DX_STATE_FILE` | `ledger.state_file` |
//! | `DX_LOG_LEVEL` | `logging.level` |

use dx_02_entity_repository::RepositoryConfig;
use dx_03_approval_authorization::AuthorizationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "DX_CONFIG";
pub const STATE_FILE_ENV: &str = "DX_STATE_FILE";
pub const LOG_LEVEL_ENV: &str = "DX_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Cannot parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Snapshot file of the local ledger.
    pub state_file: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("ledger.bin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `dx_04=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
    pub repository: RepositoryConfig,
    pub authorization: AuthorizationConfig,
}

impl RuntimeConfig {
    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `DX_STATE_FILE` and `DX_LOG_LEVEL` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(STATE_FILE_ENV).filter(|v| !v.is_empty()) {
            self.ledger.state_file = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.state_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("ledger.state_file is empty".into()));
        }
        self.authorization
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Resolve, load, override and validate the runtime config.
    ///
    /// `explicit` wins over `DX_CONFIG`; with neither, defaults are used.
    pub fn from_env(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env = |name: &str| std::env::var(name).ok();
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_PATH_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));

        let mut config = match &path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(env);
        config.validate()?;

        if let Some(path) = path {
            info!(path = %path.display(), "Loaded runtime config");
        }
        Ok(config)
    }
}
