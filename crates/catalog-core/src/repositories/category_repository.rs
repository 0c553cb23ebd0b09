//! Category repository trait (port)

use async_trait::async_trait;

use crate::domain::Category;
use crate::error::DomainError;

/// How the one-to-many menu collections are loaded when browsing the whole
/// catalog.
///
/// `PerCategory` is the N+1 pattern kept on purpose as a teaching aid: one
/// query for the categories plus one more per category for its menus. Watch
/// the query log grow with the category count, then compare with `Joined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// One extra menu query per category (the N+1 pattern).
    PerCategory,
    /// Single LEFT JOIN, grouped in memory.
    #[default]
    Joined,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Loads a category together with its menus (eager association).
    async fn find_by_id(&self, category_code: i32) -> Result<Option<Category>, DomainError>;
    /// Flat category listing, code ascending, menus left empty.
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;
    async fn find_all_with_menus(
        &self,
        strategy: FetchStrategy,
    ) -> Result<Vec<Category>, DomainError>;
    /// Cascade insert: the category row and every menu it holds go into one
    /// transaction; a failure on any row rolls back all of them.
    async fn create_with_menus(&self, category: &Category) -> Result<Category, DomainError>;
}
