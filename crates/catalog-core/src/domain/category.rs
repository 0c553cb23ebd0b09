// ============================================================================
// Catalog Core - Category Entity
// File: crates/catalog-core/src/domain/category.rs
// Description: Category row with its one-to-many menu collection
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Menu;

/// Category entity
///
/// `ref_category_code` points at another category row for the self-referencing
/// hierarchy; `None` marks a top-level category. `menus` is the one-to-many
/// side of the association: eager loads fill it, cascade insert consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub category_code: i32,

    #[validate(length(min = 1, max = 100, message = "Category name must be between 1 and 100 characters"))]
    pub category_name: String,

    pub ref_category_code: Option<i32>,

    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl Category {
    pub fn new(
        category_code: i32,
        category_name: String,
        ref_category_code: Option<i32>,
    ) -> Result<Self, validator::ValidationErrors> {
        let category = Self {
            category_code,
            category_name: category_name.trim().to_string(),
            ref_category_code,
            menus: Vec::new(),
        };

        category.validate()?;
        Ok(category)
    }

    /// Attaches a menu to this category's collection for cascade insert.
    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    pub fn is_top_level(&self) -> bool {
        self.ref_category_code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderableStatus;

    #[test]
    fn test_create_category() {
        let category = Category::new(10, "Fusion Snacks".to_string(), Some(3));
        assert!(category.is_ok());
        assert!(!category.unwrap().is_top_level());
    }

    #[test]
    fn test_create_category_rejects_blank_name() {
        assert!(Category::new(10, " ".to_string(), None).is_err());
    }

    #[test]
    fn test_add_menu() {
        let mut category = Category::new(10, "Fusion Snacks".to_string(), None).unwrap();
        let menu = Menu::new(321, "Spaghetti Cutlet".to_string(), 30000, 10, OrderableStatus::Orderable)
            .unwrap();
        category.add_menu(menu);
        assert_eq!(category.menus.len(), 1);
        assert_eq!(category.menus[0].menu_code, 321);
    }
}
