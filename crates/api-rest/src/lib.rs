//! # API REST
//!
//! REST API implementation for Asclepius.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request timing,
//!   validation-error translation)
//!
//! The triage pipeline itself lives in `asclepius-core`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

pub use routes::{router, AppState};
