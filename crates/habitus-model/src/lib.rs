//! Inference layer: pre-fit artifact loading and the scale-then-classify pipeline.

pub mod artifacts;
pub mod error;
pub mod forest;
pub mod pipeline;
pub mod scaler;

pub use artifacts::{ModelArtifacts, load_cached};
pub use error::ModelError;
pub use forest::ForestClassifier;
pub use pipeline::{Prediction, predict};
pub use scaler::StandardScaler;
