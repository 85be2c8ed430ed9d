//! Error types for fare estimation.

use super::domain::CategoryField;

/// Result type for fare estimation operations
pub type FareResult<T> = Result<T, FareError>;

/// Error type for fare estimation operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidCategory { field: CategoryField, value: String },

    #[error("Invalid departure date: {0}")]
    InvalidDate(String),

    #[error("Feature vector has {actual} entries but the model has {expected} coefficients")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Prediction is not a finite number")]
    NonFinitePrediction,

    #[error("Prediction {0} does not fit a whole-rupee price")]
    PriceOutOfRange(f64),

    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FareError {
    /// Whether the error was caused by the submitted form values rather than
    /// the model or the process state.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FareError::InvalidCategory { .. } | FareError::InvalidDate(_)
        )
    }
}
