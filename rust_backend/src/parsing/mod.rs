//! Parsers for the fare model file.
//!
//! # Example
//!
//! ```no_run
//! use flight_fare::parsing::json_parser::parse_model_json;
//! use std::path::Path;
//!
//! let model = parse_model_json(Path::new("linear_model.json"))
//!     .expect("Failed to parse model");
//! println!("{} coefficients", model.dimension());
//! ```

pub mod json_parser;


pub use json_parser::{parse_model_json, parse_model_json_str};
