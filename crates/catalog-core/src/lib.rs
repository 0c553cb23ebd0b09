//! # Catalog Core
//!
//! Domain entities, DTOs, services, and repository traits for the menu
//! catalog application.

pub mod domain;
pub mod dto;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
