//! Pre-fit feature standardisation.
//!
//! The training pipeline exports the fitted scaler as `scaler.json` with one
//! mean and one scale per feature column. Transforming applies
//! `(x - mean) / scale` per column; the parameters themselves are opaque to
//! this crate.

use habitus_core::encode::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

/// Per-feature standardisation parameters fitted at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Check the exported parameter shapes against the feature schema.
    ///
    /// Returns the defect description on mismatch; the caller wraps it into
    /// an artifact-corrupt error with the file path attached.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(format!(
                "scaler has {} means, expected {FEATURE_COUNT}",
                self.mean.len()
            ));
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(format!(
                "scaler has {} scales, expected {FEATURE_COUNT}",
                self.scale.len()
            ));
        }
        if let Some(i) = self.scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(format!("scaler scale[{i}] is {}, expected finite non-zero", self.scale[i]));
        }
        Ok(())
    }

    /// Standardise an encoded feature vector.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, x) in features.iter().enumerate() {
            out[i] = (x - self.mean[i]) / self.scale[i];
        }
        out
    }
}
