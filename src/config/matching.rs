use crate::error::ResolverError;
use serde::{Deserialize, Serialize};

/// Thresholds for reusing another model's artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Maximum relative distance per dimension (exclusive)
    pub max_ratio: f64,
    /// Approximate matches reported by a recommendation
    pub top_k: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_ratio: 0.20,
            top_k: 3,
        }
    }
}

impl MatchingConfig {
    /// A NaN or non-positive ratio would reject every candidate
    pub fn validate_ratio(max_ratio: f64) -> Result<(), ResolverError> {
        if max_ratio.is_nan() || max_ratio <= 0.0 {
            return Err(ResolverError::InvalidMatching(format!(
                "max_ratio must be positive, got {}",
                max_ratio
            )));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ResolverError> {
        Self::validate_ratio(self.max_ratio)?;
        if self.top_k == 0 {
            return Err(ResolverError::InvalidMatching(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
