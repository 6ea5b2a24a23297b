//! Reuse recommendation
//!
//! Lookup order, first satisfied wins:
//! 1. the model's own store directory holds artifacts (trusted as curated)
//! 2. artifacts of other models qualify against the profile
//! 3. nothing usable, a tuning run is needed
//!
//! A model's own artifacts always beat a closer match from another model.

use super::ranker::{find_compatible, Candidate};
use super::store::ConfigStore;
use crate::config::MatchingConfig;
use crate::error::ResolverError;
use crate::registry::ModelProfile;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Every artifact in the model's own directory
    ExactHit(Vec<PathBuf>),
    /// Best cross-model candidates, at most `top_k`
    ApproximateHit(Vec<Candidate>),
    NoMatch,
}

impl Recommendation {
    pub fn is_match(&self) -> bool {
        !matches!(self, Recommendation::NoMatch)
    }
}

pub fn recommend(
    model_name: &str,
    profile: &ModelProfile,
    store: &ConfigStore,
    matching: &MatchingConfig,
) -> Result<Recommendation, ResolverError> {
    matching.validate()?;
    profile.validate()?;

    if !store.root().is_dir() {
        return Err(ResolverError::StoreUnavailable {
            path: store.root().to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let own = store.model_artifacts(model_name);
    if !own.is_empty() {
        tracing::info!("{}: {} dedicated artifact(s)", model_name, own.len());
        return Ok(Recommendation::ExactHit(own));
    }

    let target = profile.key();
    let mut candidates = find_compatible(target, store, Some(model_name), matching.max_ratio)?;

    if candidates.is_empty() {
        tracing::info!("{}: no compatible artifacts for {}", model_name, target);
        return Ok(Recommendation::NoMatch);
    }

    tracing::info!(
        "{}: {} compatible artifact(s), reporting top {}",
        model_name,
        candidates.len(),
        matching.top_k
    );
    candidates.truncate(matching.top_k);
    Ok(Recommendation::ApproximateHit(candidates))
}
