//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::error::FareError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Estimation error
    Fare(FareError),
}

fn status_and_code(err: &FareError) -> (StatusCode, &'static str) {
    let code = match err {
        FareError::InvalidCategory { .. } => "INVALID_CATEGORY",
        FareError::InvalidDate(_) => "INVALID_DATE",
        FareError::ModelNotLoaded => "MODEL_NOT_LOADED",
        FareError::ModelLoad(_) => "MODEL_LOAD_FAILURE",
        FareError::InvalidModel(_) => "INVALID_MODEL",
        FareError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
        FareError::NonFinitePrediction => "NON_FINITE_PREDICTION",
        FareError::PriceOutOfRange(_) => "PRICE_OUT_OF_RANGE",
        FareError::Configuration(_) => "CONFIGURATION_ERROR",
    };

    let status = if err.is_input_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, FareError::ModelNotLoaded | FareError::ModelLoad(_)) {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, code)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Fare(e) => {
                let (status, code) = status_and_code(&e);
                let mut error = ApiError::new(code, e.to_string());
                if let FareError::InvalidCategory { field, .. } = &e {
                    error = error.with_details(field.form_name());
                }
                if status.is_server_error() {
                    log::warn!("Prediction failed: {}", e);
                }
                (status, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<FareError> for AppError {
    fn from(err: FareError) -> Self {
        AppError::Fare(err)
    }
}
