//! HTTP server module for the fare estimator.
//!
//! This module provides an axum-based HTTP server that exposes the form
//! submission as a REST API. It reuses the service layer and the write-once
//! model slot from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON request/response bodies                           │
//! │  - CORS, tracing, error mapping                           │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::prediction)                     │
//! │  - Feature encoding                                       │
//! │  - Linear prediction                                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Model Slot (state)                                       │
//! │  - Loaded once at startup, read-only afterwards           │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
