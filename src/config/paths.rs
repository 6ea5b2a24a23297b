use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Root of the configuration store, one subdirectory per model
    pub config_root: String,
    /// JSON file with model profiles; the built-in registry is used when unset
    pub registry_file: Option<String>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            config_root: "./configs".to_string(),
            registry_file: None,
        }
    }
}

impl PathConfig {
    pub fn config_root(&self) -> PathBuf {
        PathBuf::from(&self.config_root)
    }
}
