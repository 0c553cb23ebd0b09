// ============================================================================
// Catalog Core - Menu Service
// File: crates/catalog-core/src/services/menu_service.rs
// ============================================================================
//! Menu lookup, listing, paging and transactional CRUD.

use std::sync::Arc;

use tracing::{info, warn};

use catalog_shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use catalog_shared::{Page, PageRequest};

use crate::domain::Menu;
use crate::dto::{CategoryDto, MenuDto};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, MenuRepository, MenuSort};

/// Service over the menu and category repositories. Repositories are handed
/// in explicitly at construction; there is no container doing the wiring.
pub struct MenuService<M: MenuRepository, C: CategoryRepository> {
    menu_repo: Arc<M>,
    category_repo: Arc<C>,
}

impl<M: MenuRepository, C: CategoryRepository> MenuService<M, C> {
    pub fn new(menu_repo: Arc<M>, category_repo: Arc<C>) -> Self {
        Self {
            menu_repo,
            category_repo,
        }
    }

    /// Looks a menu up by its code. A missing code is the caller's mistake
    /// and surfaces as [`DomainError::MenuNotFound`].
    pub async fn find_menu_by_code(&self, menu_code: i32) -> Result<MenuDto, DomainError> {
        let menu = self
            .menu_repo
            .find_by_id(menu_code)
            .await?
            .ok_or_else(|| {
                warn!("Menu lookup failed, no such code: {}", menu_code);
                DomainError::MenuNotFound(menu_code)
            })?;

        Ok(MenuDto::from(menu))
    }

    /// Full menu listing, code descending.
    pub async fn find_menu_list(&self) -> Result<Vec<MenuDto>, DomainError> {
        let menus = self.menu_repo.find_all(MenuSort::CodeDesc).await?;
        Ok(menus.into_iter().map(MenuDto::from).collect())
    }

    /// Paged menu listing, code descending.
    ///
    /// `page_number` comes in 1-based from the UI and is normalized to a
    /// 0-based index; zero and negative page numbers mean the first page.
    pub async fn find_menu_page(
        &self,
        page_number: i64,
        page_size: Option<i64>,
    ) -> Result<Page<MenuDto>, DomainError> {
        let page_index = if page_number <= 0 { 0 } else { page_number - 1 };
        let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let page = self
            .menu_repo
            .find_page(PageRequest::new(page_index, size))
            .await?;

        Ok(page.map(MenuDto::from))
    }

    /// Menus priced at or above `min_price`, most expensive first.
    pub async fn find_by_menu_price(&self, min_price: i32) -> Result<Vec<MenuDto>, DomainError> {
        let menus = self.menu_repo.find_by_price_at_least(min_price).await?;
        Ok(menus.into_iter().map(MenuDto::from).collect())
    }

    /// Flat category listing for the registration form.
    pub async fn find_all_category(&self) -> Result<Vec<CategoryDto>, DomainError> {
        let categories = self.category_repo.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    /// Registers a new menu. The DTO is converted to an entity (which
    /// revalidates it) and inserted inside the repository's transaction.
    pub async fn regist_menu(&self, dto: MenuDto) -> Result<MenuDto, DomainError> {
        let menu = Menu::try_from(dto)?;
        let saved = self.menu_repo.insert(&menu).await?;
        info!("Registered menu {} ({})", saved.menu_code, saved.menu_name);
        Ok(MenuDto::from(saved))
    }

    /// Renames an existing menu: load by code, mutate through the entity's
    /// rename method, write back with an explicit update call.
    pub async fn modify_menu(&self, dto: MenuDto) -> Result<MenuDto, DomainError> {
        let mut menu = self
            .menu_repo
            .find_by_id(dto.menu_code)
            .await?
            .ok_or_else(|| {
                warn!("Modify failed, no such menu code: {}", dto.menu_code);
                DomainError::MenuNotFound(dto.menu_code)
            })?;

        menu.rename(dto.menu_name)?;

        let saved = self.menu_repo.update(&menu).await?;
        info!("Renamed menu {} to {}", saved.menu_code, saved.menu_name);
        Ok(MenuDto::from(saved))
    }

    /// Deletes by code. An absent code is not an error here; the store's
    /// zero-rows-affected semantics stand.
    pub async fn delete_menu(&self, menu_code: i32) -> Result<(), DomainError> {
        self.menu_repo.delete_by_id(menu_code).await?;
        info!("Deleted menu {}", menu_code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, OrderableStatus};
    use crate::repositories::{MockCategoryRepository, MockMenuRepository};
    use mockall::predicate::eq;

    fn sample_menu(code: i32, name: &str, price: i32) -> Menu {
        Menu::new(code, name.to_string(), price, 4, OrderableStatus::Orderable).unwrap()
    }

    fn service(
        menu_repo: MockMenuRepository,
        category_repo: MockCategoryRepository,
    ) -> MenuService<MockMenuRepository, MockCategoryRepository> {
        MenuService::new(Arc::new(menu_repo), Arc::new(category_repo))
    }

    #[tokio::test]
    async fn find_menu_by_code_returns_matching_dto() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(sample_menu(7, "Garlic Latte", 4500))));

        let service = service(menu_repo, MockCategoryRepository::new());
        let dto = service.find_menu_by_code(7).await.unwrap();

        assert_eq!(dto.menu_code, 7);
        assert_eq!(dto.menu_name, "Garlic Latte");
        assert_eq!(dto.menu_price, 4500);
    }

    #[tokio::test]
    async fn find_menu_by_code_fails_for_missing_code() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = service(menu_repo, MockCategoryRepository::new());
        let err = service.find_menu_by_code(999).await.unwrap_err();

        assert!(matches!(err, DomainError::MenuNotFound(999)));
    }

    #[tokio::test]
    async fn find_menu_list_requests_code_descending() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_all()
            .with(eq(MenuSort::CodeDesc))
            .returning(|_| {
                Ok(vec![
                    sample_menu(3, "Pickle Juice", 2000),
                    sample_menu(2, "Kimchi Shake", 5500),
                    sample_menu(1, "Mint Seaweed Soup", 9500),
                ])
            });

        let service = service(menu_repo, MockCategoryRepository::new());
        let list = service.find_menu_list().await.unwrap();

        let codes: Vec<i32> = list.iter().map(|m| m.menu_code).collect();
        assert_eq!(codes, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn paging_normalizes_one_based_page_numbers() {
        for requested in [1, 0, -5] {
            let mut menu_repo = MockMenuRepository::new();
            menu_repo
                .expect_find_page()
                .with(eq(PageRequest::new(0, DEFAULT_PAGE_SIZE)))
                .returning(|request| Ok(Page::new(vec![sample_menu(10, "Dawn Gimbap", 3500)], request, 1)));

            let service = service(menu_repo, MockCategoryRepository::new());
            let page = service.find_menu_page(requested, None).await.unwrap();

            assert_eq!(page.page, 0, "page number {} should map to index 0", requested);
            assert_eq!(page.total_items, 1);
        }
    }

    #[tokio::test]
    async fn paging_passes_later_pages_through() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_page()
            .with(eq(PageRequest::new(2, 5)))
            .returning(|request| Ok(Page::new(vec![], request, 11)));

        let service = service(menu_repo, MockCategoryRepository::new());
        let page = service.find_menu_page(3, Some(5)).await.unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn price_filter_delegates_bound() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_price_at_least()
            .with(eq(30000))
            .returning(|_| {
                Ok(vec![
                    sample_menu(321, "Spaghetti Cutlet", 32000),
                    sample_menu(55, "Abalone Porridge", 30000),
                ])
            });

        let service = service(menu_repo, MockCategoryRepository::new());
        let list = service.find_by_menu_price(30000).await.unwrap();

        assert!(list.iter().all(|m| m.menu_price >= 30000));
        assert_eq!(list[0].menu_price, 32000);
    }

    #[tokio::test]
    async fn find_all_category_maps_to_dtos() {
        let mut category_repo = MockCategoryRepository::new();
        category_repo.expect_find_all().returning(|| {
            Ok(vec![
                Category::new(1, "Meals".to_string(), None).unwrap(),
                Category::new(2, "Drinks".to_string(), None).unwrap(),
            ])
        });

        let service = service(MockMenuRepository::new(), category_repo);
        let list = service.find_all_category().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].category_name, "Meals");
    }

    #[tokio::test]
    async fn regist_menu_inserts_converted_entity() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_insert()
            .withf(|menu| menu.menu_code == 99 && menu.menu_name == "Perilla Gelato")
            .returning(|menu| Ok(menu.clone()));

        let service = service(menu_repo, MockCategoryRepository::new());
        let dto = MenuDto {
            menu_code: 99,
            menu_name: "Perilla Gelato".to_string(),
            menu_price: 6500,
            category_code: 3,
            orderable_status: OrderableStatus::Orderable,
        };

        let saved = service.regist_menu(dto).await.unwrap();
        assert_eq!(saved.menu_code, 99);
    }

    #[tokio::test]
    async fn regist_menu_rejects_invalid_dto_without_insert() {
        let menu_repo = MockMenuRepository::new();

        let service = service(menu_repo, MockCategoryRepository::new());
        let dto = MenuDto {
            menu_code: 99,
            menu_name: " ".to_string(),
            menu_price: 6500,
            category_code: 3,
            orderable_status: OrderableStatus::Orderable,
        };

        let err = service.regist_menu(dto).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn modify_menu_loads_renames_and_updates() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(sample_menu(7, "Garlic Latte", 4500))));
        menu_repo
            .expect_update()
            .withf(|menu| menu.menu_code == 7 && menu.menu_name == "Double Garlic Latte")
            .returning(|menu| Ok(menu.clone()));

        let service = service(menu_repo, MockCategoryRepository::new());
        let dto = MenuDto {
            menu_code: 7,
            menu_name: "Double Garlic Latte".to_string(),
            menu_price: 4500,
            category_code: 4,
            orderable_status: OrderableStatus::Orderable,
        };

        let saved = service.modify_menu(dto).await.unwrap();
        assert_eq!(saved.menu_name, "Double Garlic Latte");
    }

    #[tokio::test]
    async fn modify_menu_fails_for_missing_code() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = service(menu_repo, MockCategoryRepository::new());
        let dto = MenuDto {
            menu_code: 404,
            menu_name: "Anything".to_string(),
            menu_price: 1000,
            category_code: 1,
            orderable_status: OrderableStatus::Orderable,
        };

        let err = service.modify_menu(dto).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(404)));
    }

    #[tokio::test]
    async fn delete_menu_delegates_to_repository() {
        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_delete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));

        let service = service(menu_repo, MockCategoryRepository::new());
        assert!(service.delete_menu(7).await.is_ok());
    }
}
