//! Cross-model candidate ranking

use super::key::ConfigKey;
use super::scorer::{ensure_scorable, score};
use super::store::ConfigStore;
use crate::config::MatchingConfig;
use crate::error::ResolverError;
use std::path::PathBuf;

/// A qualifying artifact from some model's directory
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub location: PathBuf,
    pub experts: usize,
    pub intermediate: usize,
    pub similarity: f64,
}

/// Collect every artifact across the store that qualifies against `target`,
/// best first.
///
/// `excluding` names a model directory to leave out of the scan. Unparseable
/// names and unreadable subdirectories contribute nothing; an unreadable root
/// or an invalid `max_ratio` is an error.
pub fn find_compatible(
    target: ConfigKey,
    store: &ConfigStore,
    excluding: Option<&str>,
    max_ratio: f64,
) -> Result<Vec<Candidate>, ResolverError> {
    MatchingConfig::validate_ratio(max_ratio)?;
    ensure_scorable(target)?;

    let mut candidates = Vec::new();

    for dir in store.model_dirs()? {
        if excluding.is_some() && dir.file_name().and_then(|n| n.to_str()) == excluding {
            continue;
        }

        for path in ConfigStore::artifacts_in(&dir) {
            let key = match ConfigKey::from_path(&path) {
                Ok(key) => key,
                Err(skip) => {
                    tracing::debug!("Ignoring {}: {}", path.display(), skip);
                    continue;
                }
            };

            let compat = score(key, target)?;
            tracing::debug!(
                "{} vs {}: experts {:.4}, intermediate {:.4}, similarity {:.4}",
                key,
                target,
                compat.expert_ratio,
                compat.intermediate_ratio,
                compat.similarity
            );

            if compat.qualifies(max_ratio) {
                candidates.push(Candidate {
                    location: path,
                    experts: key.experts,
                    intermediate: key.intermediate,
                    similarity: compat.similarity,
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    Ok(candidates)
}
