//! Loading and process-wide caching of the pre-fit artifact pair.
//!
//! The artifact directory must contain `scaler.json` and `classifier.json`,
//! both exported by the training pipeline. [`load_cached`] deserialises them
//! at most once per directory and shares the result for the process lifetime;
//! a failed load is also remembered, so prediction stays disabled until the
//! files are fixed and the process restarted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::ModelError;
use crate::forest::ForestClassifier;
use crate::scaler::StandardScaler;

/// File name of the exported scaler inside the artifact directory.
pub const SCALER_FILE: &str = "scaler.json";

/// File name of the exported classifier inside the artifact directory.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// The pre-fit scaler/classifier pair, immutable once loaded.
#[derive(Debug)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub classifier: ForestClassifier,
}

impl ModelArtifacts {
    /// Load both artifacts from a directory, uncached.
    ///
    /// Fails with [`ModelError::ArtifactNotFound`] if either file is absent
    /// and [`ModelError::ArtifactCorrupt`] if deserialisation or the
    /// structural checks fail.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let scaler: StandardScaler = read_artifact(&dir.join(SCALER_FILE))?;
        scaler
            .check()
            .map_err(|reason| corrupt(dir.join(SCALER_FILE), reason))?;

        let classifier: ForestClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;
        classifier
            .check()
            .map_err(|reason| corrupt(dir.join(CLASSIFIER_FILE), reason))?;

        info!(
            dir = %dir.display(),
            trees = classifier.tree_count(),
            classes = classifier.n_classes(),
            "loaded model artifacts"
        );
        Ok(Self { scaler, classifier })
    }
}

/// Outcome per artifact directory. `None` records a failed load.
type Cache = Mutex<HashMap<PathBuf, Option<Arc<ModelArtifacts>>>>;

static CACHE: OnceLock<Cache> = OnceLock::new();

/// Load the artifact pair for `dir`, at most once per process.
///
/// Repeated calls for the same directory return the same shared instance
/// without touching storage. The first failure is reported in full
/// (not found / corrupt); the directory is then marked unavailable and later
/// calls get [`ModelError::ModelUnavailable`] without retrying, since a
/// broken deployment needs a fix and a restart rather than a retry loop.
pub fn load_cached(dir: &Path) -> Result<Arc<ModelArtifacts>, ModelError> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(PoisonError::into_inner);

    match map.get(dir) {
        Some(Some(artifacts)) => Ok(Arc::clone(artifacts)),
        Some(None) => Err(ModelError::ModelUnavailable(dir.to_path_buf())),
        None => match ModelArtifacts::load(dir) {
            Ok(artifacts) => {
                let artifacts = Arc::new(artifacts);
                map.insert(dir.to_path_buf(), Some(Arc::clone(&artifacts)));
                Ok(artifacts)
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "model artifacts unavailable");
                map.insert(dir.to_path_buf(), None);
                Err(err)
            }
        },
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    if !path.exists() {
        return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
    }
    let content =
        fs::read_to_string(path).map_err(|e| corrupt(path.to_path_buf(), e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| corrupt(path.to_path_buf(), e.to_string()))
}

fn corrupt(path: PathBuf, reason: String) -> ModelError {
    ModelError::ArtifactCorrupt { path, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitus_core::encode::FEATURE_COUNT;

    /// Write a valid identity scaler and a one-stump forest into `dir`.
    fn write_artifacts(dir: &Path, class: usize) {
        write_scaler(dir);
        fs::write(
            dir.join(CLASSIFIER_FILE),
            format!(
                r#"{{"n_classes": 7, "trees": [{{"nodes": [{{"class": {class}}}]}}]}}"#
            ),
        )
        .unwrap();
    }

    fn write_scaler(dir: &Path) {
        fs::write(
            dir.join(SCALER_FILE),
            format!(
                r#"{{"mean": {:?}, "scale": {:?}}}"#,
                vec![0.0; FEATURE_COUNT],
                vec![1.0; FEATURE_COUNT]
            ),
        )
        .unwrap();
    }

    #[test]
    fn load_reads_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), 1);

        let artifacts = ModelArtifacts::load(dir.path()).unwrap();
        assert_eq!(artifacts.classifier.tree_count(), 1);
        assert_eq!(artifacts.classifier.n_classes(), 7);
    }

    #[test]
    fn missing_scaler_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match ModelArtifacts::load(dir.path()).unwrap_err() {
            ModelError::ArtifactNotFound(path) => {
                assert!(path.ends_with(SCALER_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_classifier_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write_scaler(dir.path());
        match ModelArtifacts::load(dir.path()).unwrap_err() {
            ModelError::ArtifactNotFound(path) => {
                assert!(path.ends_with(CLASSIFIER_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SCALER_FILE), "not json").unwrap();
        assert!(matches!(
            ModelArtifacts::load(dir.path()),
            Err(ModelError::ArtifactCorrupt { .. })
        ));
    }

    #[test]
    fn structural_defect_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        write_scaler(dir.path());
        // Leaf class outside n_classes.
        fs::write(
            dir.path().join(CLASSIFIER_FILE),
            r#"{"n_classes": 2, "trees": [{"nodes": [{"class": 5}]}]}"#,
        )
        .unwrap();
        match ModelArtifacts::load(dir.path()).unwrap_err() {
            ModelError::ArtifactCorrupt { path, reason } => {
                assert!(path.ends_with(CLASSIFIER_FILE));
                assert!(reason.contains("leaf class 5"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cache_returns_the_same_instance() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), 2);

        let first = load_cached(dir.path()).unwrap();
        let second = load_cached(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_remembers_a_failed_load() {
        let dir = tempfile::tempdir().unwrap();

        // First call reports the underlying failure.
        assert!(matches!(
            load_cached(dir.path()),
            Err(ModelError::ArtifactNotFound(_))
        ));

        // Fixing the files does not help until the process restarts.
        write_artifacts(dir.path(), 0);
        assert!(matches!(
            load_cached(dir.path()),
            Err(ModelError::ModelUnavailable(_))
        ));
    }
}
