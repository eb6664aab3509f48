//! Menu item entity - Represents one purchasable item on the menu.
//!
//! Every item belongs to exactly one section (non-veg, veg, starter,
//! cooldrink) recorded in the `section` column. Items are created and edited
//! only through the administrative endpoints; the cart and search read them.

use super::section::MenuSection;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    /// Unique identifier for the menu item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Section this item is listed under
    pub section: MenuSection,
    /// Human-readable name (e.g., "Chicken Biryani", "Lime Soda")
    pub name: String,
    /// Price in currency units, two fractional digits
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    /// Longer free-text description shown on the item page
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Short category label for grouping and search (e.g., "biryani", "soda")
    pub category: String,
    /// URL of the item's image
    pub image_url: String,
    /// Whether the item is currently orderable
    pub is_available: bool,
    /// Time of day the kitchen has the item ready by
    pub prepared_time: Time,
    /// When the item was added to the menu
    pub added_on: DateTime,
}

/// Menu items reference no other tables; cart lines copy rather than link
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
