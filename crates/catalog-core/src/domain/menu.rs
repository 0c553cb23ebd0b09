// ============================================================================
// Catalog Core - Menu Entity
// File: crates/catalog-core/src/domain/menu.rs
// Description: Menu row with its many-to-one category reference
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Whether a menu can currently be ordered.
///
/// Stored as a single `Y`/`N` column in `tbl_menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderableStatus {
    #[default]
    #[serde(rename = "Y")]
    Orderable,
    #[serde(rename = "N")]
    NotOrderable,
}

impl OrderableStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Y" | "y" => Some(Self::Orderable),
            "N" | "n" => Some(Self::NotOrderable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orderable => "Y",
            Self::NotOrderable => "N",
        }
    }

    pub fn is_orderable(&self) -> bool {
        matches!(self, Self::Orderable)
    }
}

/// Menu entity
///
/// `menu_code` is the immutable identifier; `category_code` is the foreign
/// key of the many-to-one association to [`super::Category`]. The referenced
/// category must exist, enforced by the foreign key in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub menu_code: i32,

    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub menu_name: String,

    #[validate(range(min = 0, message = "Menu price cannot be negative"))]
    pub menu_price: i32,

    pub category_code: i32,

    pub orderable_status: OrderableStatus,
}

impl Menu {
    pub fn new(
        menu_code: i32,
        menu_name: String,
        menu_price: i32,
        category_code: i32,
        orderable_status: OrderableStatus,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            menu_code,
            menu_name: menu_name.trim().to_string(),
            menu_price,
            category_code,
            orderable_status,
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Renames the menu. The identifier never changes; this is the only
    /// mutation the entity supports.
    pub fn rename(&mut self, menu_name: String) -> Result<(), validator::ValidationErrors> {
        let previous = std::mem::replace(&mut self.menu_name, menu_name.trim().to_string());
        if let Err(errors) = self.validate() {
            self.menu_name = previous;
            return Err(errors);
        }
        Ok(())
    }
}
