//! Model loading utilities.
//!
//! This module combines fetching (local file or http(s) URL) with parsing and
//! produces a ready-to-use [`LoadedModel`] that records where the model came
//! from and the checksum of the document.
//!
//! # Example
//!
//! ```no_run
//! use flight_fare::io::{ModelLoader, ModelSource};
//!
//! # async fn run() -> flight_fare::core::FareResult<()> {
//! let source: ModelSource = "linear_model.json".parse()?;
//! let loaded = ModelLoader::default().load(&source).await?;
//! println!("Loaded {} ({})", loaded.source, loaded.checksum);
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod loaders;

pub use checksum::calculate_checksum;
pub use loaders::{LoadedModel, ModelFetcher, ModelLoader, ModelSource, SourceFetcher};
