//! Feature assembly and linear prediction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::domain::{encode, CategoryField};
use crate::core::error::{FareError, FareResult};
use crate::models::{FeatureVector, LinearModel, PredictionInput};
use crate::time::{days_until_departure, parse_departure_date, DayOffsetMode};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Encode a submission into the model's feature vector.
///
/// Fields are encoded in feature order and the first invalid one aborts
/// assembly.
pub fn encode_features(
    input: &PredictionInput,
    now: DateTime<Utc>,
    mode: DayOffsetMode,
) -> FareResult<FeatureVector> {
    let mut codes = [0u8; 7];
    for (slot, field) in codes.iter_mut().zip(CategoryField::ALL) {
        *slot = encode(field, input.value(field))?;
    }

    let departure = parse_departure_date(&input.departure_date)?;
    let days = days_until_departure(departure, now, mode);

    Ok(FeatureVector::new(codes, days))
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `0.5 -> 1`, `2.5 -> 3`, `-0.5 -> 0`, `-2.5 -> -2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Evaluate `model` on `features` and round the result.
///
/// # Errors
/// * `DimensionMismatch` if the lengths differ
/// * `NonFinitePrediction` if the sum overflows
/// * `PriceOutOfRange` if the rounded sum does not fit an `i64`
pub fn predict(features: &[f64], model: &LinearModel) -> FareResult<i64> {
    let y = model.evaluate(features)?;
    if !y.is_finite() {
        return Err(FareError::NonFinitePrediction);
    }

    // i64::MIN is -2^63 exactly; 2^63 itself is one past i64::MAX
    let rounded = round_half_up(y);
    let limit = -(i64::MIN as f64);
    if rounded < -limit || rounded >= limit {
        return Err(FareError::PriceOutOfRange(y));
    }
    Ok(rounded as i64)
}

/// A price estimate and the features it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareEstimate {
    pub price: i64,
    pub features: FeatureVector,
}

impl fmt::Display for FareEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.price)
    }
}

/// Runs submissions through encoding and the model.
#[derive(Debug, Clone, Copy)]
pub struct FarePredictor<'a> {
    model: &'a LinearModel,
    mode: DayOffsetMode,
}

impl<'a> FarePredictor<'a> {
    pub fn new(model: &'a LinearModel, mode: DayOffsetMode) -> Self {
        Self { model, mode }
    }

    pub fn mode(&self) -> DayOffsetMode {
        self.mode
    }

    /// Estimate using the current time.
    pub fn estimate(&self, input: &PredictionInput) -> FareResult<FareEstimate> {
        self.estimate_at(input, Utc::now())
    }

    /// Estimate as if submitted at `now`.
    pub fn estimate_at(&self, input: &PredictionInput, now: DateTime<Utc>) -> FareResult<FareEstimate> {
        let features = encode_features(input, now, self.mode)?;
        let price = predict(features.as_slice(), self.model)?;

        log::debug!(
            "Predicted {}{} for features {:?}",
            CURRENCY_SYMBOL,
            price,
            features.as_slice()
        );

        Ok(FareEstimate { price, features })
    }
}
