//! Service layer for fare estimation.
//!
//! This module sits between the surfaces (CLI, HTTP) and the core encoding
//! tables and model. It assembles feature vectors, evaluates the linear model
//! and formats the result.

pub mod prediction;

pub use prediction::{
    encode_features, predict, round_half_up, FareEstimate, FarePredictor, CURRENCY_SYMBOL,
};
