use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("artifact corrupt: {path}: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },

    #[error("model artifacts unavailable: an earlier load from {0} failed")]
    ModelUnavailable(PathBuf),

    #[error("classifier returned class {0}, outside the label table")]
    InvalidClassIndex(usize),

    #[error(transparent)]
    Encode(#[from] habitus_core::EncodeError),
}
