// ============================================================================
// Catalog Core - Transfer Objects
// File: crates/catalog-core/src/dto.rs
// Description: Flat shapes crossing the service/controller boundary
// ============================================================================
//! Transfer objects and their entity conversions.
//!
//! Entities are what the repositories persist; DTOs are what crosses the
//! service boundary. Conversion is explicit, same-named field by field, and
//! the DTO-to-entity direction revalidates through the entity constructors.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Menu, OrderableStatus};

/// Menu transfer object. Carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDto {
    pub menu_code: i32,
    pub menu_name: String,
    pub menu_price: i32,
    pub category_code: i32,
    pub orderable_status: OrderableStatus,
}

/// Category transfer object; `menus` is filled on eager reads and consumed
/// by cascade insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub category_code: i32,
    pub category_name: String,
    pub ref_category_code: Option<i32>,
    #[serde(default)]
    pub menus: Vec<MenuDto>,
}

impl From<Menu> for MenuDto {
    fn from(menu: Menu) -> Self {
        Self {
            menu_code: menu.menu_code,
            menu_name: menu.menu_name,
            menu_price: menu.menu_price,
            category_code: menu.category_code,
            orderable_status: menu.orderable_status,
        }
    }
}

impl TryFrom<MenuDto> for Menu {
    type Error = validator::ValidationErrors;

    fn try_from(dto: MenuDto) -> Result<Self, Self::Error> {
        Menu::new(
            dto.menu_code,
            dto.menu_name,
            dto.menu_price,
            dto.category_code,
            dto.orderable_status,
        )
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            category_code: category.category_code,
            category_name: category.category_name,
            ref_category_code: category.ref_category_code,
            menus: category.menus.into_iter().map(MenuDto::from).collect(),
        }
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = validator::ValidationErrors;

    fn try_from(dto: CategoryDto) -> Result<Self, Self::Error> {
        let mut category =
            Category::new(dto.category_code, dto.category_name, dto.ref_category_code)?;
        for menu_dto in dto.menus {
            category.add_menu(Menu::try_from(menu_dto)?);
        }
        Ok(category)
    }
}
