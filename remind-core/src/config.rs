//! Global remind configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RemindError, RemindResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/remind";
static DEFAULT_EVENT_FILE: &str = "remind.txt";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_event_file() -> String {
    DEFAULT_EVENT_FILE.to_string()
}

/// Global configuration at ~/.config/remind/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct RemindConfig {
    /// Directory holding the event file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the event file inside `data_dir`.
    #[serde(default = "default_event_file")]
    pub event_file: String,
}

impl Default for RemindConfig {
    fn default() -> Self {
        RemindConfig {
            data_dir: default_data_dir(),
            event_file: default_event_file(),
        }
    }
}

impl RemindConfig {
    pub fn config_path() -> RemindResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RemindError::Config("Could not determine config directory".into()))?
            .join("remind");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> RemindResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| RemindError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RemindError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RemindResult<()> {
        let contents = format!(
            "\
# remind configuration

# Where the event file lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Name of the event file inside data_dir:
# event_file = \"{DEFAULT_EVENT_FILE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RemindError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RemindError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: RemindConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.event_file, DEFAULT_EVENT_FILE);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: RemindConfig =
            toml::from_str("data_dir = \"/tmp/events\"\nevent_file = \"e.txt\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/events"));
        assert_eq!(config.event_file, "e.txt");
        assert_eq!(config.data_path(), PathBuf::from("/tmp/events"));
    }

    #[test]
    fn default_config_file_parses_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        RemindConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: RemindConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
