//! # Catalog API
//!
//! HTTP handlers, response envelope, and app state.

pub mod handlers;
pub mod response;
pub mod state;
