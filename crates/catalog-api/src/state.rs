use std::sync::Arc;

use catalog_core::services::{CategoryService, MenuService};
use catalog_infrastructure::{PgCategoryRepository, PgMenuRepository};
use catalog_shared::config::AppConfig;

/// Concrete service types wired against the PostgreSQL adapters.
pub type Menus = MenuService<PgMenuRepository, PgCategoryRepository>;
pub type Categories = CategoryService<PgCategoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<Menus>,
    pub category_service: Arc<Categories>,
    pub config: AppConfig,
}
