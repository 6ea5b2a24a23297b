//! Domain errors surfaced by the resolver

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Unknown model: {name}. Available: {available:?}")]
    UnknownModel { name: String, available: Vec<String> },

    #[error("Invalid profile for {name}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Invalid matching parameters: {0}")]
    InvalidMatching(String),

    #[error("Configuration store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolverError {
    pub(crate) fn invalid_profile(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
