//! Repository traits (ports)

pub mod menu_repository;
pub mod category_repository;

pub use menu_repository::{MenuRepository, MenuSort};
pub use category_repository::{CategoryRepository, FetchStrategy};

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
