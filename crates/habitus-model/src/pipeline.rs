//! The single prediction entry point: encode → scale → classify → label.

use habitus_core::{ObesityLevel, Profile, encode};
use tracing::debug;

use crate::artifacts::ModelArtifacts;
use crate::error::ModelError;
use crate::forest::argmax;

/// Outcome of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub level: ObesityLevel,
    /// Raw classifier output class.
    pub class: usize,
    /// Fraction of trees that voted for the winning class.
    pub agreement: f64,
}

/// Predict the obesity level for one profile.
///
/// Validates the numeric answers against the survey ranges, encodes the
/// profile, standardises the vector with the pre-fit scaler, and takes the
/// forest's majority vote. Fails with [`ModelError::InvalidClassIndex`] if
/// the classifier's answer falls outside the seven-entry label table, which
/// means the artifact and the label table disagree and the deployment needs
/// fixing rather than a retry.
pub fn predict(profile: &Profile, artifacts: &ModelArtifacts) -> Result<Prediction, ModelError> {
    profile.validate()?;

    let features = encode(profile);
    debug!(?features, "encoded profile");

    let scaled = artifacts.scaler.transform(&features);
    let votes = artifacts.classifier.vote_counts(&scaled);
    let class = argmax(&votes);
    debug!(class, ?votes, "classifier vote");

    let level = ObesityLevel::from_class(class).ok_or(ModelError::InvalidClassIndex(class))?;
    let agreement = votes[class] as f64 / artifacts.classifier.tree_count() as f64;

    Ok(Prediction {
        level,
        class,
        agreement,
    })
}
