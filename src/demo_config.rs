//! Settings for the demo programs under `src/bin/`, read from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DemoConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Items the demo sequence is built from.
    pub items: Vec<i64>,
    /// Value looked up with `index_of`.
    pub probe: i64,
    /// Value counted and then removed once.
    pub remove: i64,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            items: vec![143, 89, 4, 4, 245, 760, 17, 45],
            probe: 45,
            remove: 4,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self, DemoConfigError> {
        let config: DemoConfig = toml::from_str(source).map_err(|source| DemoConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| DemoConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source, path)?;
        info!(path = %path.display(), items = config.items.len(), "loaded demo config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), DemoConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(DemoConfigError::InvalidValue {
                field: "log_level".to_string(),
                reason: format!("expected one of {}", LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
