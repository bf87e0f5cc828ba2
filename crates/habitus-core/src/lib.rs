pub mod encode;
pub mod error;
pub mod label;
pub mod profile;
pub mod vocab;

pub use encode::{FeatureVector, encode};
pub use error::EncodeError;
pub use label::ObesityLevel;
pub use profile::{Frequency, Gender, Profile, Transport, YesNo};
