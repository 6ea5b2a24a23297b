//! Tuning configuration manager for Mixture-of-Experts inference kernels
//!
//! Given a model's structural profile (expert count, intermediate size), decides
//! whether an existing tuning artifact can be reused or a new tuning run is needed.
//!
//! ## Main Components
//!
//! - `resolver`: Filename keys, compatibility scoring, ranking and recommendation
//! - `registry`: Model profiles, built-in or loaded from JSON
//! - `config`: Configuration management
//! - `tuning`: Launching the external benchmark in tuning mode

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod tuning;

pub use config::Config;
pub use error::ResolverError;
pub use registry::{ModelProfile, ModelRegistry};
pub use resolver::{find_compatible, recommend, Recommendation, Resolver};

/// Library errors
pub use anyhow::{Error, Result};
