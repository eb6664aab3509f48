//! Cart line entity - One row in a user's cart.
//!
//! Each line references a menu item by `(item_id, section)` and carries a
//! denormalized snapshot of the item's name, image, and price taken when the
//! line was created. Later menu edits deliberately never flow back into
//! existing lines. A user can hold at most one line per menu item, enforced
//! by a unique index over `(user_id, item_id, section)`.

use super::section::MenuSection;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cart line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_lines")]
pub struct Model {
    /// Unique identifier for the cart line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity of the owning user, as supplied by the identity provider
    pub user_id: String,
    /// Id of the referenced menu item
    pub item_id: i64,
    /// Section of the referenced menu item
    pub section: MenuSection,
    /// Snapshot of the item name at the time the line was created
    pub item_name: String,
    /// Snapshot of the item image URL at the time the line was created
    pub item_image: String,
    /// Snapshot of the unit price at the time the line was created
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,
    /// Number of units; always >= 1 while the line exists
    pub quantity: i32,
    /// When the line was first added to the cart
    pub added_at: DateTime,
}

impl Model {
    /// Line subtotal: `unit_price × quantity`. Computed on read, never stored.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Cart lines copy menu item data rather than link to it, so a line outlives
/// edits and deletions of the item it was created from
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
