/// Rejection raised while normalizing raw records.
///
/// `index` is the zero-based position of the offending record in the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: category must not be empty")]
    EmptyCategory { index: usize },

    #[error("record {index}: quantity must be non-negative, got {value}")]
    NegativeQuantity { index: usize, value: f64 },

    #[error("record {index}: quantity is not a finite number")]
    NonFiniteQuantity { index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum RollupError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RollupError>;
