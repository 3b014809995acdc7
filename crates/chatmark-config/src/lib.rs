pub use chatmark_engine::DEFAULT_MAX_FRAGMENT_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `max_fragment_len`.
pub const MAX_FRAGMENT_LEN_ENV: &str = "CHATMARK_MAX_FRAGMENT_LEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for {var}: expected a positive integer")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target fragment size in bytes of plain text.
    #[serde(default = "default_max_fragment_len")]
    pub max_fragment_len: usize,
}

fn default_max_fragment_len() -> usize {
    DEFAULT_MAX_FRAGMENT_LEN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fragment_len: DEFAULT_MAX_FRAGMENT_LEN,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads `config_path` (or the default location), falls back to defaults
    /// when no file exists, then applies environment overrides.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match config_path {
            Some(path) => {
                let path = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
                Self::load_from_path(&path)?
            }
            None => Self::load()?,
        };
        let mut config = loaded.unwrap_or_default();
        config.apply_env_overrides(std::env::var(MAX_FRAGMENT_LEN_ENV).ok())?;
        Ok(config)
    }

    /// Applies the value of [`MAX_FRAGMENT_LEN_ENV`] if one was set.
    pub fn apply_env_overrides(
        &mut self,
        max_fragment_len: Option<String>,
    ) -> Result<(), ConfigError> {
        let Some(value) = max_fragment_len else {
            return Ok(());
        };
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => {
                log::debug!("{MAX_FRAGMENT_LEN_ENV} overrides max_fragment_len to {n}");
                self.max_fragment_len = n;
                Ok(())
            }
            _ => Err(ConfigError::InvalidEnv {
                var: MAX_FRAGMENT_LEN_ENV,
                value,
            }),
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied path.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
