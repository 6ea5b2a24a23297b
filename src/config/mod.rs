pub mod matching;
pub mod paths;
pub mod tuning;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use matching::MatchingConfig;
pub use paths::PathConfig;
pub use tuning::TuningConfig;

/// Main configuration for the tuning manager
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub matching: MatchingConfig,
    pub tuning: TuningConfig,
}

impl Config {
    /// Load from a JSON file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.matching.validate()?;
        if self.tuning.tp_size == 0 {
            anyhow::bail!("tuning.tp_size must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.matching.max_ratio, 0.20);
        assert_eq!(config.matching.top_k, 3);
        assert_eq!(config.tuning.tp_size, 1);
        assert_eq!(config.tuning.dtype, "auto");
        assert_eq!(config.paths.config_root, "./configs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("moe-tune.json");
        fs::write(&path, r#"{ "matching": { "top_k": 5 } }"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.matching.top_k, 5);
        assert_eq!(config.matching.max_ratio, 0.20);
        assert_eq!(config.tuning.seed, 42);
        Ok(())
    }

    #[test]
    fn test_load_rejects_zero_ratio() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("moe-tune.json");
        fs::write(&path, r#"{ "matching": { "max_ratio": 0.0 } }"#)?;
        assert!(Config::load(&path).is_err());
        Ok(())
    }
}
