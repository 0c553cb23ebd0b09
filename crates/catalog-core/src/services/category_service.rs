// ============================================================================
// Catalog Core - Category Service
// File: crates/catalog-core/src/services/category_service.rs
// ============================================================================
//! Category association behavior: eager lookups, cascade insert, and the
//! catalog browse that demonstrates the N+1 pattern.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::Category;
use crate::dto::CategoryDto;
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, FetchStrategy};

pub struct CategoryService<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> CategoryService<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    /// Loads a category with its menus already attached (eager fetch).
    pub async fn find_category(&self, category_code: i32) -> Result<CategoryDto, DomainError> {
        let category = self
            .category_repo
            .find_by_id(category_code)
            .await?
            .ok_or_else(|| {
                warn!("Category lookup failed, no such code: {}", category_code);
                DomainError::CategoryNotFound(category_code)
            })?;

        Ok(CategoryDto::from(category))
    }

    /// Cascade insert: the category and every menu in its list are persisted
    /// in a single repository call and a single transaction.
    pub async fn regist_category(&self, dto: CategoryDto) -> Result<CategoryDto, DomainError> {
        let category = Category::try_from(dto)?;
        let saved = self.category_repo.create_with_menus(&category).await?;
        info!(
            "Registered category {} with {} menus",
            saved.category_code,
            saved.menus.len()
        );
        Ok(CategoryDto::from(saved))
    }

    /// Loads every category with its menu collection under the chosen fetch
    /// strategy. `FetchStrategy::PerCategory` issues one query per category
    /// on top of the category query itself; run it with query logging on to
    /// watch the N+1 pattern happen.
    pub async fn browse_catalog(
        &self,
        strategy: FetchStrategy,
    ) -> Result<Vec<CategoryDto>, DomainError> {
        let categories = self.category_repo.find_all_with_menus(strategy).await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
