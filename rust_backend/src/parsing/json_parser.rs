use serde::Deserialize;
use std::path::Path;

use crate::core::error::{FareError, FareResult};
use crate::models::{LinearModel, MODEL_DIMENSION};

const PREVIEW_CHARS: usize = 500;

/// Raw JSON structure as it comes from linear_model.json
#[derive(Debug, Deserialize)]
struct RawLinearModel {
    coef: Vec<f64>,
    intercept: f64,
}

/// Parse linear_model.json into a [`LinearModel`]
pub fn parse_model_json(json_path: &Path) -> FareResult<LinearModel> {
    let json_content = std::fs::read_to_string(json_path).map_err(|e| {
        FareError::ModelLoad(format!(
            "Failed to read model file {}: {}",
            json_path.display(),
            e
        ))
    })?;

    parse_model_json_str(&json_content)
}

/// Parse a model document from a string
pub fn parse_model_json_str(json_str: &str) -> FareResult<LinearModel> {
    // First validate that it's valid JSON
    let json_value: serde_json::Value = serde_json::from_str(json_str).map_err(|e| {
        FareError::ModelLoad(format!(
            "Invalid JSON syntax: {}. First {} chars: {}",
            e,
            PREVIEW_CHARS,
            preview(json_str)
        ))
    })?;

    let object = json_value.as_object().ok_or_else(|| {
        FareError::InvalidModel("model document must be a JSON object".to_string())
    })?;

    match object.get("coef") {
        None => {
            return Err(FareError::InvalidModel(format!(
                "model must contain a 'coef' key. Found keys: {:?}",
                object.keys().collect::<Vec<_>>()
            )))
        }
        Some(coef) if !coef.is_array() => {
            return Err(FareError::InvalidModel(format!(
                "'coef' must be an array of numbers, found {}",
                json_type(coef)
            )))
        }
        Some(_) => {}
    }

    let raw: RawLinearModel = serde_path_to_error::deserialize(json_value).map_err(|e| {
        FareError::InvalidModel(format!("at '{}': {}", e.path(), e.inner()))
    })?;

    if raw.coef.len() != MODEL_DIMENSION {
        return Err(FareError::InvalidModel(format!(
            "'coef' must have {} entries, found {}",
            MODEL_DIMENSION,
            raw.coef.len()
        )));
    }

    LinearModel::try_new(raw.coef, raw.intercept)
}

fn preview(s: &str) -> String {
    if s.chars().count() > PREVIEW_CHARS {
        format!("{}...", s.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        s.to_string()
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
