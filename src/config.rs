use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::config::{DEFAULT_HISTORY_FILE, DEFAULT_LOG_LEVEL, DEFAULT_PROMPT};
use crate::common::exception::DBError;

/// Runtime settings of the interactive shell.
///
/// Every field is optional in the TOML file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DBConfig {
    /// Where line-editor history is kept. `None` disables history.
    pub history_file: Option<PathBuf>,
    pub prompt: String,
    pub log_level: String,
    pub color: bool,
    pub banner: bool,
}

impl Default for DBConfig {
    fn default() -> Self {
        Self {
            history_file: Some(PathBuf::from(DEFAULT_HISTORY_FILE)),
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            color: true,
            banner: true,
        }
    }
}

impl DBConfig {
    pub fn load(path: &Path) -> Result<Self, DBError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, DBError> {
        let config: DBConfig = toml::from_str(contents)?;
        Ok(config)
    }
}
