use serde::{Deserialize, Serialize};

/// Tuning runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub python: String,
    pub benchmark_script: String,
    pub tp_size: usize,
    pub dtype: String,
    pub seed: u64,
    pub trust_remote_code: bool,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            benchmark_script: "benchmark_moe.py".to_string(),
            tp_size: 1,
            dtype: "auto".to_string(),
            seed: 42,
            trust_remote_code: true,
        }
    }
}
