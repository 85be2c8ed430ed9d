//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::dto::{
    HealthResponse, ModelInfoResponse, OptionsResponse, PredictRequest, PredictResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::core::domain::CategoryField;
use crate::services::FarePredictor;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the model was loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let model = if state.model.is_loaded() {
        "loaded"
    } else {
        "unavailable"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        model: model.to_string(),
    }))
}

// =============================================================================
// Model
// =============================================================================

/// GET /v1/model
///
/// Coefficients, intercept and provenance of the loaded model.
pub async fn get_model(State(state): State<AppState>) -> HandlerResult<ModelInfoResponse> {
    let loaded = state.model.get()?;
    Ok(Json(ModelInfoResponse::new(loaded, state.day_offset)))
}

/// GET /v1/options
///
/// Accepted values of every categorical form field.
pub async fn list_options() -> HandlerResult<OptionsResponse> {
    Ok(Json(OptionsResponse {
        fields: CategoryField::ALL.into_iter().map(Into::into).collect(),
    }))
}

// =============================================================================
// Prediction
// =============================================================================

/// POST /v1/predict
///
/// Estimate the fare for a form submission.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> HandlerResult<PredictResponse> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let loaded = state.model.get()?;
    let estimate = FarePredictor::new(&loaded.model, state.day_offset).estimate(&request)?;

    Ok(Json(estimate.into()))
}
