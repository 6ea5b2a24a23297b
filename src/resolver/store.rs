//! Read-only view over the configuration store
//!
//! Layout: `<root>/<model_name>/E<experts>N<intermediate>_tp<tp>_<dtype>.json`.
//! Only directory listings are read; artifact bodies are never opened.

use crate::error::ResolverError;
use std::fs;
use std::path::{Path, PathBuf};

const ARTIFACT_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory a model's own artifacts live in
    pub fn model_dir(&self, model_name: &str) -> PathBuf {
        self.root.join(model_name)
    }

    /// Artifacts in the model's own directory.
    ///
    /// A missing or unreadable directory yields an empty list.
    pub fn model_artifacts(&self, model_name: &str) -> Vec<PathBuf> {
        let dir = self.model_dir(model_name);
        if !dir.is_dir() {
            return Vec::new();
        }
        Self::artifacts_in(&dir)
    }

    /// Every model subdirectory under the root, in path order.
    ///
    /// Fails only when the root itself cannot be listed.
    pub fn model_dirs(&self) -> Result<Vec<PathBuf>, ResolverError> {
        let entries = fs::read_dir(&self.root).map_err(|source| ResolverError::StoreUnavailable {
            path: self.root.clone(),
            source,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_dir() {
                        dirs.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", self.root.display(), e)
                }
            }
        }

        dirs.sort();
        Ok(dirs)
    }

    /// Artifact files directly inside `dir`, in path order. Best effort: read
    /// failures are logged and contribute nothing.
    pub fn artifacts_in(dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|path| path.is_file() && is_artifact(path))
            .collect();

        files.sort();
        files
    }
}

fn is_artifact(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ARTIFACT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_model_artifacts_only_json_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("mixtral_8x7b");
        fs::create_dir_all(dir.join("nested.json")).unwrap();
        fs::write(dir.join("E8N14336_tp1_auto.json"), "{}").unwrap();
        fs::write(dir.join("README.md"), "notes").unwrap();

        let store = ConfigStore::new(tmp.path());
        let files = store.model_artifacts("mixtral_8x7b");
        assert_eq!(files, vec![dir.join("E8N14336_tp1_auto.json")]);
    }

    #[test]
    fn test_missing_model_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path());
        assert!(store.model_artifacts("deepseek_v2").is_empty());
    }

    #[test]
    fn test_missing_root_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path().join("nope"));
        assert!(matches!(
            store.model_dirs(),
            Err(ResolverError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_model_dirs_skip_loose_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("E8N14336_tp1_auto.json"), "{}").unwrap();

        let dirs = ConfigStore::new(tmp.path()).model_dirs().unwrap();
        assert_eq!(dirs, vec![tmp.path().join("a"), tmp.path().join("b")]);
    }
}
