//! PostgreSQL repository implementations

pub mod menu_repo_impl;
pub mod category_repo_impl;

pub use menu_repo_impl::PgMenuRepository;
pub use category_repo_impl::PgCategoryRepository;
