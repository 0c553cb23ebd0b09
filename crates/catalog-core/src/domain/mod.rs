//! Domain entities for the menu catalog.

pub mod menu;
pub mod category;

// Re-export all entities and enums
pub use menu::{Menu, OrderableStatus};
pub use category::Category;
