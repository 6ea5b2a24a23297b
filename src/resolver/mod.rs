//! Configuration compatibility resolver
//!
//! Decides whether an existing tuning artifact can be reused for a model or
//! whether a new tuning run is required.

pub mod key;
pub mod ranker;
pub mod recommend;
pub mod scorer;
pub mod store;

pub use key::{ConfigKey, ParseSkip};
pub use ranker::{find_compatible, Candidate};
pub use recommend::{recommend, Recommendation};
pub use scorer::{score, Compatibility};
pub use store::ConfigStore;

use crate::config::MatchingConfig;
use crate::error::ResolverError;
use crate::registry::ModelRegistry;

/// Registry, store and matching parameters bundled for name-based lookups
pub struct Resolver<'a> {
    registry: &'a ModelRegistry,
    store: ConfigStore,
    matching: MatchingConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a ModelRegistry, store: ConfigStore, matching: MatchingConfig) -> Self {
        Self {
            registry,
            store,
            matching,
        }
    }

    /// Recommendation for a registered model
    pub fn recommend_for(&self, model_name: &str) -> Result<Recommendation, ResolverError> {
        let profile = self.registry.lookup(model_name)?;
        recommend(model_name, profile, &self.store, &self.matching)
    }

    /// Every qualifying artifact from other models' directories, uncapped
    pub fn compatible_for(&self, model_name: &str) -> Result<Vec<Candidate>, ResolverError> {
        let profile = self.registry.lookup(model_name)?;
        profile.validate()?;
        find_compatible(
            profile.key(),
            &self.store,
            Some(model_name),
            self.matching.max_ratio,
        )
    }
}
