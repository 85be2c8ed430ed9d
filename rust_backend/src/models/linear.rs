//! Precomputed linear regression model.

use serde::Serialize;

use crate::core::error::{FareError, FareResult};

/// Number of coefficients the fare model was trained with.
pub const MODEL_DIMENSION: usize = 8;

/// A fitted linear model: `y = intercept + Σ coefficients[i] * x[i]`.
///
/// Immutable once built. Serializes to the same `{coef, intercept}` shape the
/// model file uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearModel {
    #[serde(rename = "coef")]
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Build a model, rejecting NaN and infinite parameters.
    pub fn try_new(coefficients: Vec<f64>, intercept: f64) -> FareResult<Self> {
        if let Some(idx) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(FareError::InvalidModel(format!(
                "coef[{}] is not a finite number",
                idx
            )));
        }
        if !intercept.is_finite() {
            return Err(FareError::InvalidModel(
                "intercept is not a finite number".to_string(),
            ));
        }
        Ok(Self::new(coefficients, intercept))
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Unrounded model output for `features`.
    ///
    /// # Errors
    /// `DimensionMismatch` when `features` and the coefficients differ in
    /// length.
    pub fn evaluate(&self, features: &[f64]) -> FareResult<f64> {
        if features.len() != self.coefficients.len() {
            return Err(FareError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (c, x)| acc + c * x))
    }
}
