use crate::error::{CardfileError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cardfile, stored as `config.json` in the platform
/// config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardfileConfig {
    /// Override for the contacts file location. `None` means the platform
    /// data directory default.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl CardfileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardfileError::Io)?;
        let config: CardfileConfig =
            serde_json::from_str(&content).map_err(CardfileError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardfileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardfileError::Serialization)?;
        fs::write(config_path, content).map_err(CardfileError::Io)?;
        Ok(())
    }
}
