//! Model registry: name → structural profile
//!
//! Ships with the built-in MoE models and can be extended or replaced from a
//! JSON file, so resolver logic never depends on a fixed table.

pub mod profile;

pub use profile::{ModelProfile, SizeCategory};

use crate::error::ResolverError;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Built-in MoE model profiles
pub static BUILTIN_PROFILES: Lazy<Vec<ModelProfile>> = Lazy::new(|| {
    vec![
        ModelProfile {
            name: "qwen3_30b".to_string(),
            model_path: "Qwen/Qwen3-30B-A3B-Instruct-2507".to_string(),
            expert_count: 64,
            intermediate_size: 18944,
            hidden_size: 3584,
            topk: 4,
            size_category: SizeCategory::Medium,
        },
        ModelProfile {
            name: "mixtral_8x7b".to_string(),
            model_path: "mistralai/Mixtral-8x7B-Instruct-v0.1".to_string(),
            expert_count: 8,
            intermediate_size: 14336,
            hidden_size: 4096,
            topk: 2,
            size_category: SizeCategory::Small,
        },
        ModelProfile {
            name: "deepseek_v2".to_string(),
            model_path: "deepseek-ai/DeepSeek-V2-Chat".to_string(),
            expert_count: 160,
            intermediate_size: 12288,
            hidden_size: 5120,
            topk: 6,
            size_category: SizeCategory::Large,
        },
    ]
});

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, ModelProfile>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for profile in BUILTIN_PROFILES.iter() {
            registry.models.insert(profile.name.clone(), profile.clone());
        }
        registry
    }

    /// Load profiles from a JSON array
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model registry {}", path.display()))?;
        let profiles: Vec<ModelProfile> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse model registry {}", path.display()))?;

        let mut registry = Self::new();
        for profile in profiles {
            registry.register(profile)?;
        }
        Ok(registry)
    }

    /// Add or replace a profile. Invalid profiles are rejected here so they
    /// never reach scoring.
    pub fn register(&mut self, profile: ModelProfile) -> Result<(), ResolverError> {
        profile.validate()?;
        let name = profile.name.clone();
        if self.models.insert(name.clone(), profile).is_some() {
            tracing::debug!("Replaced registry entry for {}", name);
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&ModelProfile, ResolverError> {
        self.models
            .get(name)
            .ok_or_else(|| ResolverError::UnknownModel {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// Profiles in name order
    pub fn profiles(&self) -> impl Iterator<Item = &ModelProfile> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
