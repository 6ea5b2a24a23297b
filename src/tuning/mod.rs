//! Launching tuning runs
//!
//! The benchmark itself runs out of process; only its exit status is consumed.

pub mod runner;

pub use runner::{BenchmarkRunner, TuningOutcome, TuningRequest, TuningRunner};

use crate::registry::ModelProfile;

/// Batch sizes to benchmark: explicit ones win, otherwise the profile's
/// size category decides.
pub fn default_batch_sizes(profile: &ModelProfile, requested: Option<Vec<usize>>) -> Vec<usize> {
    match requested {
        Some(sizes) if !sizes.is_empty() => sizes,
        _ => profile.size_category.default_batch_sizes(),
    }
}
