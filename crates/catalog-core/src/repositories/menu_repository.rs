//! Menu repository trait (port)

use async_trait::async_trait;
use catalog_shared::{Page, PageRequest};

use crate::domain::Menu;
use crate::error::DomainError;

/// Orderings a menu listing can be fetched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSort {
    /// `menu_code` descending (default listing order).
    CodeDesc,
    /// `menu_price` descending (price filter order).
    PriceDesc,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn find_by_id(&self, menu_code: i32) -> Result<Option<Menu>, DomainError>;
    async fn find_all(&self, sort: MenuSort) -> Result<Vec<Menu>, DomainError>;
    async fn find_page(&self, page: PageRequest) -> Result<Page<Menu>, DomainError>;
    async fn find_by_price_at_least(&self, min_price: i32) -> Result<Vec<Menu>, DomainError>;
    /// Persists a new row inside a scoped transaction.
    async fn insert(&self, menu: &Menu) -> Result<Menu, DomainError>;
    /// Writes an already-loaded entity back. Explicit save call; there is no
    /// commit-time dirty checking here.
    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError>;
    /// Deleting an absent identifier is not an error; the store reports zero
    /// affected rows and that is the end of it.
    async fn delete_by_id(&self, menu_code: i32) -> Result<(), DomainError>;
}
