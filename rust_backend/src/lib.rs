//! # Flight Fare Estimator
//!
//! Price estimates for domestic flights from a precomputed linear model.
//!
//! A submission (airline, cities, departure and arrival time of day, stops,
//! class and departure date) is encoded with the fixed category tables the
//! model was trained with, extended with the number of days until departure,
//! and evaluated as `intercept + Σ coef[i] * feature[i]`, rounded to whole
//! rupees.
//!
//! ## Architecture
//!
//! - [`core`]: Category encoding tables and the crate error type
//! - [`models`]: Linear model, raw submission and feature vector
//! - [`time`]: "Days until departure" calculation
//! - [`parsing`]: `linear_model.json` parser
//! - [`io`]: Model fetching (file or URL) with checksums
//! - [`state`]: Write-once model slot
//! - [`services`]: Feature assembly and prediction
//! - [`config`]: TOML configuration
//! - [`http`]: Axum-based REST API (feature `http-server`)
//!
//! ## Example
//!
//! ```
//! use flight_fare::models::{LinearModel, PredictionInput};
//! use flight_fare::services::FarePredictor;
//! use flight_fare::time::DayOffsetMode;
//!
//! let model = LinearModel::new(vec![1.0; 8], 0.0);
//! let input = PredictionInput {
//!     airline: "Indigo".into(),
//!     source_city: "Delhi".into(),
//!     departure_time: "Morning".into(),
//!     stops: "one".into(),
//!     arrival_time: "Evening".into(),
//!     destination_city: "Mumbai".into(),
//!     travel_class: "Economy".into(),
//!     departure_date: "2099-01-01".into(),
//! };
//!
//! let estimate = FarePredictor::new(&model, DayOffsetMode::Instant)
//!     .estimate(&input)
//!     .unwrap();
//! assert_eq!(&estimate.features.as_slice()[..7], &[1.0, 0.0, 1.0, 1.0, 3.0, 2.0, 0.0]);
//! ```

pub mod config;
pub mod core;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;
pub mod state;
pub mod time;

#[cfg(feature = "http-server")]
pub mod http;
