//! Data Transfer Objects for the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::domain::{CategoryField, CategoryOption};
use crate::io::LoadedModel;
use crate::services::FareEstimate;
use crate::time::DayOffsetMode;

/// The request body of `POST /v1/predict` is the raw form submission.
pub use crate::models::PredictionInput as PredictRequest;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "loaded" or "unavailable"
    pub model: String,
}

/// Response for a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub price: i64,
    /// Price formatted for display, e.g. "₹5123"
    pub display: String,
    pub features: Vec<f64>,
}

impl From<FareEstimate> for PredictResponse {
    fn from(estimate: FareEstimate) -> Self {
        Self {
            price: estimate.price,
            display: estimate.to_string(),
            features: estimate.features.into(),
        }
    }
}

/// Loaded model parameters and provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub coef: Vec<f64>,
    pub intercept: f64,
    pub source: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
    pub day_offset: DayOffsetMode,
}

impl ModelInfoResponse {
    pub fn new(loaded: &LoadedModel, day_offset: DayOffsetMode) -> Self {
        Self {
            coef: loaded.model.coefficients().to_vec(),
            intercept: loaded.model.intercept(),
            source: loaded.source.to_string(),
            checksum: loaded.checksum.clone(),
            loaded_at: loaded.loaded_at,
            day_offset,
        }
    }
}

/// One selectable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
    pub code: u8,
}

impl From<CategoryOption> for OptionDto {
    fn from(option: CategoryOption) -> Self {
        Self {
            value: option.value.to_string(),
            label: option.label.to_string(),
            code: option.code,
        }
    }
}

/// Accepted values of one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Form field name, e.g. "source_city"
    pub name: String,
    pub title: String,
    pub options: Vec<OptionDto>,
}

impl From<CategoryField> for FieldOptions {
    fn from(field: CategoryField) -> Self {
        Self {
            name: field.form_name().to_string(),
            title: field.title().to_string(),
            options: field.options().into_iter().map(Into::into).collect(),
        }
    }
}

/// Response of `GET /v1/options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub fields: Vec<FieldOptions>,
}
