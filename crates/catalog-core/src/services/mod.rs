//! Domain services (business logic)

pub mod menu_service;
pub mod category_service;

pub use menu_service::MenuService;
pub use category_service::CategoryService;
