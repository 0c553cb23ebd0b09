//! # Catalog Shared
//!
//! Shared utilities, types, configuration and telemetry for the menu catalog
//! application.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
