//! Model-ready feature vector.

use serde::Serialize;

use super::linear::MODEL_DIMENSION;

/// The eight model inputs in training order:
/// `[airline, source_city, departure_time, stops, arrival_time,
/// destination_city, class, days_until_departure]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; MODEL_DIMENSION]);

impl FeatureVector {
    /// `codes` must be ordered like [`CategoryField::ALL`](crate::core::domain::CategoryField::ALL).
    pub fn new(codes: [u8; 7], days_until_departure: i64) -> Self {
        let mut values = [0.0; MODEL_DIMENSION];
        for (slot, code) in values.iter_mut().zip(codes) {
            *slot = f64::from(code);
        }
        values[MODEL_DIMENSION - 1] = days_until_departure as f64;
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn days_until_departure(&self) -> i64 {
        self.0[MODEL_DIMENSION - 1] as i64
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(v: FeatureVector) -> Self {
        v.0.to_vec()
    }
}
