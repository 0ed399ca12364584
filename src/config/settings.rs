use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::DEFAULT_RECIPES_KEY;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: &'static str },
}

/// How an edit is applied to the store
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// Remove the original and append a fresh recipe with a new id
    #[default]
    Replace,
    /// Keep the original id and list position
    InPlace,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Durable slot key for the recipe list
    pub storage_key: String,
    /// Clock refresh period
    pub clock_tick: Duration,
    /// Edit behavior for the form's Update action
    pub edit_mode: EditMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_RECIPES_KEY.to_string(),
            clock_tick: Duration::from_millis(1000),
            edit_mode: EditMode::Replace,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlStorageConfig {
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlClockConfig {
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlRecipesConfig {
    pub edit_mode: Option<EditMode>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub clock: Option<TomlClockConfig>,
    pub recipes: Option<TomlRecipesConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// Writes the bundled example on first run. An unreadable file is logged
    /// and ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Ignoring unreadable config file"
                );
                Config::default()
            }
        }
    }

    /// Load a specific file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse config text and merge it over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(storage) = toml_config.storage {
            if let Some(key) = storage.key {
                if key.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "storage.key",
                        reason: "must not be empty",
                    });
                }
                config.storage_key = key;
            }
        }

        if let Some(clock) = toml_config.clock {
            if let Some(tick_ms) = clock.tick_ms {
                if tick_ms == 0 {
                    return Err(ConfigError::Invalid {
                        key: "clock.tick_ms",
                        reason: "must be greater than zero",
                    });
                }
                config.clock_tick = Duration::from_millis(tick_ms);
            }
        }

        if let Some(recipes) = toml_config.recipes {
            if let Some(edit_mode) = recipes.edit_mode {
                config.edit_mode = edit_mode;
            }
        }

        Ok(config)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let snapshot = TomlConfig {
            storage: Some(TomlStorageConfig {
                key: Some(self.storage_key.clone()),
            }),
            clock: Some(TomlClockConfig {
                tick_ms: Some(self.clock_tick.as_millis() as u64),
            }),
            recipes: Some(TomlRecipesConfig {
                edit_mode: Some(self.edit_mode),
            }),
        };
        toml::to_string(&snapshot)
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_edit_mode(mut self, edit_mode: EditMode) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
