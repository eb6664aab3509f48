//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust struct definitions. The cart's
//! per-user uniqueness rule is enforced here as a storage-level unique index rather
//! than an application-side check, which closes the race between two concurrent
//! adds of the same item by the same user.

use crate::entities::{cart_line, CartLine, MenuItem};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/tiffin.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all database tables and indexes if they do not already exist.
///
/// Table statements are generated from the entity definitions. On top of that,
/// a unique index over `(user_id, item_id, section)` on `cart_lines` enforces
/// the invariant that a user holds at most one line per menu item.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut menu_item_table = schema.create_table_from_entity(MenuItem);
    menu_item_table.if_not_exists();
    db.execute(builder.build(&menu_item_table)).await?;

    let mut cart_line_table = schema.create_table_from_entity(CartLine);
    cart_line_table.if_not_exists();
    db.execute(builder.build(&cart_line_table)).await?;

    let cart_line_unique = Index::create()
        .name("idx_unique_cart_line_user_item")
        .table(CartLine)
        .col(cart_line::Column::UserId)
        .col(cart_line::Column::ItemId)
        .col(cart_line::Column::Section)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&cart_line_unique)).await?;

    Ok(())
}
