use crate::error::{Result, RollbookError};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEED_COUNT: usize = 20;

/// Configuration for rollbook, stored next to the data files as
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbookConfig {
    /// Rows per roster page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How many records `seed` generates when no count is given
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_seed_count() -> usize {
    DEFAULT_SEED_COUNT
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl RollbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollbookError::Io)?;
        let config: RollbookConfig =
            serde_json::from_str(&content).map_err(RollbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollbookError::Serialization)?;
        fs::write(config_path, content).map_err(RollbookError::Io)?;
        Ok(())
    }
}
