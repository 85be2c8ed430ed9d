//! Core domain for fare estimation.
//!
//! This module defines the categorical encoding tables the linear model was
//! trained with, and the error type shared by the rest of the crate.

#[macro_use]
mod macros;

pub mod domain;
pub mod error;

pub use domain::{
    encode, Airline, CategoryField, CategoryOption, DestinationCity, SourceCity, Stops,
    TimeOfDay, TravelClass,
};
pub use error::{FareError, FareResult};
