use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("unknown {vocabulary} category: {value:?}")]
    UnknownCategory {
        vocabulary: &'static str,
        value: String,
    },

    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
