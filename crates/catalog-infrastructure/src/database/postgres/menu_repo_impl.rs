// ============================================================================
// Catalog Infrastructure - PostgreSQL Menu Repository
// File: crates/catalog-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use catalog_core::domain::{Menu, OrderableStatus};
use catalog_core::error::DomainError;
use catalog_core::repositories::{MenuRepository, MenuSort};
use catalog_shared::{Page, PageRequest};

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub menu_code: i32,
    pub menu_name: String,
    pub menu_price: i32,
    pub category_code: i32,
    pub orderable_status: String,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            menu_code: row.menu_code,
            menu_name: row.menu_name,
            menu_price: row.menu_price,
            category_code: row.category_code,
            orderable_status: OrderableStatus::from_str(&row.orderable_status).unwrap_or_default(),
        }
    }
}

const MENU_COLUMNS: &str = "menu_code, menu_name, menu_price, category_code, orderable_status";

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_by_id(&self, menu_code: i32) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu WHERE menu_code = $1"
        ))
        .bind(menu_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by code: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self, sort: MenuSort) -> Result<Vec<Menu>, DomainError> {
        let order_by = match sort {
            MenuSort::CodeDesc => "menu_code DESC",
            MenuSort::PriceDesc => "menu_price DESC",
        };

        let rows: Vec<MenuRow> = sqlx::query_as(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu ORDER BY {order_by}"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menus: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<Menu>, DomainError> {
        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tbl_menu")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error counting menus: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let rows: Vec<MenuRow> = sqlx::query_as(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu ORDER BY menu_code DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menu page: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let items = rows.into_iter().map(Menu::from).collect();
        Ok(Page::new(items, page, total_items))
    }

    async fn find_by_price_at_least(&self, min_price: i32) -> Result<Vec<Menu>, DomainError> {
        let rows: Vec<MenuRow> = sqlx::query_as(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu WHERE menu_price >= $1 ORDER BY menu_price DESC"
        ))
        .bind(min_price)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error filtering menus by price: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn insert(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error starting insert transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO tbl_menu (menu_code, menu_name, menu_price, category_code, orderable_status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(menu.menu_code)
        .bind(&menu.menu_name)
        .bind(menu.menu_price)
        .bind(menu.category_code)
        .bind(menu.orderable_status.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting menu: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        // Rollback is the drop path; reaching commit means every statement ran.
        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing menu insert: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(menu.clone())
    }

    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE tbl_menu
            SET menu_name = $2, menu_price = $3, category_code = $4, orderable_status = $5
            WHERE menu_code = $1
            "#,
        )
        .bind(menu.menu_code)
        .bind(&menu.menu_name)
        .bind(menu.menu_price)
        .bind(menu.category_code)
        .bind(menu.orderable_status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating menu: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MenuNotFound(menu.menu_code));
        }

        Ok(menu.clone())
    }

    async fn delete_by_id(&self, menu_code: i32) -> Result<(), DomainError> {
        // Zero affected rows is fine; delete of an absent code is a no-op.
        sqlx::query("DELETE FROM tbl_menu WHERE menu_code = $1")
            .bind(menu_code)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting menu: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_entity_conversion() {
        let row = MenuRow {
            menu_code: 7,
            menu_name: "Garlic Latte".to_string(),
            menu_price: 4500,
            category_code: 2,
            orderable_status: "Y".to_string(),
        };

        let menu = Menu::from(row);
        assert_eq!(menu.menu_code, 7);
        assert_eq!(menu.orderable_status, OrderableStatus::Orderable);
    }

    #[test]
    fn test_unknown_status_falls_back_to_default() {
        let row = MenuRow {
            menu_code: 7,
            menu_name: "Garlic Latte".to_string(),
            menu_price: 4500,
            category_code: 2,
            orderable_status: "?".to_string(),
        };

        assert_eq!(Menu::from(row).orderable_status, OrderableStatus::default());
    }
}
