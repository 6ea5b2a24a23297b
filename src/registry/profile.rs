//! Structural model profiles

use crate::error::ResolverError;
use crate::resolver::ConfigKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse size class; only drives default tuning batch sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    #[serde(alias = "small_moe")]
    Small,
    #[serde(alias = "medium_moe")]
    Medium,
    #[serde(alias = "large_moe")]
    Large,
}

impl SizeCategory {
    /// Batch sizes benchmarked when the caller does not pass any
    pub fn default_batch_sizes(&self) -> Vec<usize> {
        let max = match self {
            SizeCategory::Small => 256,
            SizeCategory::Medium => 128,
            SizeCategory::Large => 64,
        };
        std::iter::successors(Some(1usize), |b| Some(b * 2))
            .take_while(|b| *b <= max)
            .collect()
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    /// Local path or HuggingFace id handed to the tuning runner
    pub model_path: String,
    pub expert_count: usize,
    pub intermediate_size: usize,
    pub hidden_size: usize,
    pub topk: usize,
    pub size_category: SizeCategory,
}

impl ModelProfile {
    pub fn key(&self) -> ConfigKey {
        ConfigKey::new(self.expert_count, self.intermediate_size)
    }

    pub fn validate(&self) -> Result<(), ResolverError> {
        if self.name.is_empty() {
            return Err(ResolverError::invalid_profile(&self.name, "name must not be empty"));
        }
        if self.expert_count == 0 {
            return Err(ResolverError::invalid_profile(
                &self.name,
                "expert_count must be positive",
            ));
        }
        if self.intermediate_size == 0 {
            return Err(ResolverError::invalid_profile(
                &self.name,
                "intermediate_size must be positive",
            ));
        }
        Ok(())
    }
}
