use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const KEYS: [&str; 2] = ["title", "log_level"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "todos".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let config_path = get_config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        match key {
            "title" => Ok(&self.title),
            "log_level" => Ok(&self.log_level),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "title" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "title cannot be empty".to_string(),
                    });
                }
                self.title = value;
            }
            "log_level" => {
                let previous = std::mem::replace(&mut self.log_level, value);
                if let Err(e) = self.env_filter() {
                    self.log_level = previous;
                    return Err(e);
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|e| ConfigError::InvalidValue {
            key: "log_level".to_string(),
            reason: e.to_string(),
        })
    }
}

pub fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("todo-reactive").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Unknown configuration key '{0}'. Supported keys: title, log_level")]
    UnknownKey(String),
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("title", "groceries".to_string()).unwrap();
        config.set("log_level", "debug".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get("title").unwrap(), "groceries");
        assert_eq!(loaded.get("log_level").unwrap(), "debug");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = \"work\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.title, "work");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(matches!(config.get("file_path"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(
            config.set("file_path", "x".to_string()),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("title", String::new()),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("log_level", "todo=loud".to_string()),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, Config::default());
    }
}
