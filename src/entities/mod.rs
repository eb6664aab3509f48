//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod cart_line;
pub mod menu_item;
pub mod section;

// Re-export specific types to avoid conflicts
pub use cart_line::{Column as CartLineColumn, Entity as CartLine, Model as CartLineModel};
pub use menu_item::{Column as MenuItemColumn, Entity as MenuItem, Model as MenuItemModel};
pub use section::MenuSection;
