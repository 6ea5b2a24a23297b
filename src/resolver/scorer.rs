//! Similarity between an artifact key and a target profile

use super::key::ConfigKey;
use crate::error::ResolverError;

/// Per-dimension relative distances and their averaged similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compatibility {
    pub expert_ratio: f64,
    pub intermediate_ratio: f64,
    pub similarity: f64,
}

impl Compatibility {
    /// Both dimensions must be strictly within `max_ratio`; the average is not
    /// consulted.
    pub fn qualifies(&self, max_ratio: f64) -> bool {
        self.expert_ratio < max_ratio && self.intermediate_ratio < max_ratio
    }
}

fn relative_distance(value: usize, target: usize) -> f64 {
    value.abs_diff(target) as f64 / target as f64
}

/// A target with a zero dimension cannot be scored against
pub fn ensure_scorable(target: ConfigKey) -> Result<(), ResolverError> {
    if target.experts == 0 || target.intermediate == 0 {
        return Err(ResolverError::invalid_profile(
            &target.to_string(),
            "expert_count and intermediate_size must be positive",
        ));
    }
    Ok(())
}

/// Score `key` against `target`
pub fn score(key: ConfigKey, target: ConfigKey) -> Result<Compatibility, ResolverError> {
    ensure_scorable(target)?;

    let expert_ratio = relative_distance(key.experts, target.experts);
    let intermediate_ratio = relative_distance(key.intermediate, target.intermediate);

    Ok(Compatibility {
        expert_ratio,
        intermediate_ratio,
        similarity: 1.0 - (expert_ratio + intermediate_ratio) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_key_scores_one() {
        let key = ConfigKey::new(64, 18944);
        let c = score(key, key).unwrap();
        assert_eq!(c.similarity, 1.0);
        assert!(c.qualifies(0.2));
    }

    #[test]
    fn test_ratios_are_relative_to_target() {
        let c = score(ConfigKey::new(60, 18000), ConfigKey::new(64, 18944)).unwrap();
        assert!((c.expert_ratio - 0.0625).abs() < 1e-9);
        assert!((c.intermediate_ratio - 944.0 / 18944.0).abs() < 1e-9);
        assert!((c.similarity - 0.944).abs() < 1e-3, "got {}", c.similarity);
        assert!(c.qualifies(0.2));
    }

    #[test]
    fn test_expert_mismatch_alone_disqualifies() {
        // expert_ratio 0.25, intermediate_ratio 0.0
        let c = score(ConfigKey::new(10, 14336), ConfigKey::new(8, 14336)).unwrap();
        assert_eq!(c.intermediate_ratio, 0.0);
        assert!((c.expert_ratio - 0.25).abs() < 1e-9);
        assert!(c.similarity > 0.85);
        assert!(!c.qualifies(0.2));
    }

    #[test]
    fn test_threshold_is_strict() {
        // exactly 20% off on experts
        let c = score(ConfigKey::new(12, 100), ConfigKey::new(10, 100)).unwrap();
        assert!(!c.qualifies(0.2));
        assert!(c.qualifies(0.25));
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = score(ConfigKey::new(8, 100), ConfigKey::new(0, 100)).unwrap_err();
        assert!(matches!(err, ResolverError::InvalidProfile { .. }));
        assert!(score(ConfigKey::new(8, 100), ConfigKey::new(8, 0)).is_err());
    }
}
