// ============================================================================
// Catalog Infrastructure - PostgreSQL Category Repository
// File: crates/catalog-infrastructure/src/database/postgres/category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use catalog_core::domain::{Category, Menu, OrderableStatus};
use catalog_core::error::DomainError;
use catalog_core::repositories::{CategoryRepository, FetchStrategy};

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn menus_of(&self, category_code: i32) -> Result<Vec<Menu>, DomainError> {
        let rows: Vec<MenuOfCategoryRow> = sqlx::query_as(
            r#"
            SELECT menu_code, menu_name, menu_price, category_code, orderable_status
            FROM tbl_menu
            WHERE category_code = $1
            ORDER BY menu_code
            "#,
        )
        .bind(category_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menus of category: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct CategoryRow {
    pub category_code: i32,
    pub category_name: String,
    pub ref_category_code: Option<i32>,
}

#[derive(Debug, FromRow)]
struct MenuOfCategoryRow {
    pub menu_code: i32,
    pub menu_name: String,
    pub menu_price: i32,
    pub category_code: i32,
    pub orderable_status: String,
}

/// Row of the LEFT JOIN between categories and menus; the menu side is NULL
/// for categories without any menu.
#[derive(Debug, FromRow)]
struct CategoryMenuJoinRow {
    pub category_code: i32,
    pub category_name: String,
    pub ref_category_code: Option<i32>,
    pub menu_code: Option<i32>,
    pub menu_name: Option<String>,
    pub menu_price: Option<i32>,
    pub orderable_status: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            category_code: row.category_code,
            category_name: row.category_name,
            ref_category_code: row.ref_category_code,
            menus: Vec::new(),
        }
    }
}

impl From<MenuOfCategoryRow> for Menu {
    fn from(row: MenuOfCategoryRow) -> Self {
        Menu {
            menu_code: row.menu_code,
            menu_name: row.menu_name,
            menu_price: row.menu_price,
            category_code: row.category_code,
            orderable_status: OrderableStatus::from_str(&row.orderable_status).unwrap_or_default(),
        }
    }
}

/// Groups join rows (ordered by category code) back into categories.
fn group_join_rows(rows: Vec<CategoryMenuJoinRow>) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for row in rows {
        if categories
            .last()
            .map(|c| c.category_code != row.category_code)
            .unwrap_or(true)
        {
            categories.push(Category {
                category_code: row.category_code,
                category_name: row.category_name.clone(),
                ref_category_code: row.ref_category_code,
                menus: Vec::new(),
            });
        }

        if let (Some(menu_code), Some(menu_name), Some(menu_price)) =
            (row.menu_code, row.menu_name, row.menu_price)
        {
            let status = row
                .orderable_status
                .as_deref()
                .and_then(OrderableStatus::from_str)
                .unwrap_or_default();

            // last() just matched or pushed this category
            if let Some(category) = categories.last_mut() {
                category.menus.push(Menu {
                    menu_code,
                    menu_name,
                    menu_price,
                    category_code: category.category_code,
                    orderable_status: status,
                });
            }
        }
    }

    categories
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, category_code: i32) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT category_code, category_name, ref_category_code
            FROM tbl_category
            WHERE category_code = $1
            "#,
        )
        .bind(category_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding category by code: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut category = Category::from(row);
        category.menus = self.menus_of(category_code).await?;
        Ok(Some(category))
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT category_code, category_name, ref_category_code
            FROM tbl_category
            ORDER BY category_code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing categories: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_all_with_menus(
        &self,
        strategy: FetchStrategy,
    ) -> Result<Vec<Category>, DomainError> {
        match strategy {
            FetchStrategy::PerCategory => {
                // The N+1 pattern, kept as an illustration: one category
                // query, then one menu query per category below.
                let mut categories = self.find_all().await?;

                for category in &mut categories {
                    debug!(
                        "per-category menu query for category {}",
                        category.category_code
                    );
                    category.menus = self.menus_of(category.category_code).await?;
                }

                debug!(
                    "catalog loaded with 1 category query + {} menu queries",
                    categories.len()
                );
                Ok(categories)
            }
            FetchStrategy::Joined => {
                let rows: Vec<CategoryMenuJoinRow> = sqlx::query_as(
                    r#"
                    SELECT c.category_code, c.category_name, c.ref_category_code,
                           m.menu_code, m.menu_name, m.menu_price, m.orderable_status
                    FROM tbl_category c
                    LEFT JOIN tbl_menu m ON m.category_code = c.category_code
                    ORDER BY c.category_code, m.menu_code
                    "#,
                )
                .fetch_all(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error joining catalog: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

                Ok(group_join_rows(rows))
            }
        }
    }

    async fn create_with_menus(&self, category: &Category) -> Result<Category, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error starting cascade insert: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO tbl_category (category_code, category_name, ref_category_code)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.category_code)
        .bind(&category.category_name)
        .bind(category.ref_category_code)
        .execute(&mut *tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting category: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        for menu in &category.menus {
            sqlx::query(
                r#"
                INSERT INTO tbl_menu (menu_code, menu_name, menu_price, category_code, orderable_status)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(menu.menu_code)
            .bind(&menu.menu_name)
            .bind(menu.menu_price)
            // Children always land in the parent being inserted.
            .bind(category.category_code)
            .bind(menu.orderable_status.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error cascading menu insert: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing cascade insert: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(category.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_row(
        category_code: i32,
        category_name: &str,
        menu: Option<(i32, &str, i32)>,
    ) -> CategoryMenuJoinRow {
        CategoryMenuJoinRow {
            category_code,
            category_name: category_name.to_string(),
            ref_category_code: None,
            menu_code: menu.map(|m| m.0),
            menu_name: menu.map(|m| m.1.to_string()),
            menu_price: menu.map(|m| m.2),
            orderable_status: menu.map(|_| "Y".to_string()),
        }
    }

    #[test]
    fn test_group_join_rows_collects_menus_per_category() {
        let rows = vec![
            join_row(1, "Meals", Some((11, "Mint Seaweed Soup", 9500))),
            join_row(1, "Meals", Some((12, "Abalone Porridge", 30000))),
            join_row(2, "Drinks", Some((21, "Garlic Latte", 4500))),
        ];

        let categories = group_join_rows(rows);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].menus.len(), 2);
        assert_eq!(categories[1].menus.len(), 1);
        assert_eq!(categories[1].menus[0].category_code, 2);
    }

    #[test]
    fn test_group_join_rows_keeps_empty_categories() {
        let rows = vec![
            join_row(1, "Meals", Some((11, "Mint Seaweed Soup", 9500))),
            join_row(2, "Seasonal", None),
        ];

        let categories = group_join_rows(rows);
        assert_eq!(categories.len(), 2);
        assert!(categories[1].menus.is_empty());
    }

    #[test]
    fn test_category_row_conversion() {
        let row = CategoryRow {
            category_code: 3,
            category_name: "Desserts".to_string(),
            ref_category_code: Some(1),
        };

        let category = Category::from(row);
        assert_eq!(category.category_code, 3);
        assert_eq!(category.ref_category_code, Some(1));
        assert!(category.menus.is_empty());
    }
}
