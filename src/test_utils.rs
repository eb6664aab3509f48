//! Shared test utilities for `Tiffin`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::catalog::{self, NewMenuItem},
    entities::{self, MenuSection},
    errors::Result,
};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Default user identity for cart tests.
pub const USER: &str = "test_user";

/// Creates an in-memory `SQLite` database with all tables and indexes
/// initialized. This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fields for a test menu item with sensible defaults.
///
/// # Defaults
/// * `description`: "Test item"
/// * `category`: "test"
/// * `image_url`: a placeholder URL
/// * `is_available`: true
/// * `prepared_time`: midnight
#[must_use]
pub fn new_test_item(name: &str, price: Decimal) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        price,
        description: "Test item".to_string(),
        category: "test".to_string(),
        image_url: format!("https://images.example/{}.jpg", name.to_lowercase()),
        is_available: true,
        prepared_time: NaiveTime::MIN,
    }
}

/// Creates a test menu item in the given section with defaulted fields.
pub async fn create_test_menu_item(
    db: &DatabaseConnection,
    section: MenuSection,
    name: &str,
    price: Decimal,
) -> Result<entities::menu_item::Model> {
    catalog::create_menu_item(db, section, new_test_item(name, price)).await
}

/// Creates a test menu item with a custom category.
/// Use this when search tests need to control the category field.
pub async fn create_custom_menu_item(
    db: &DatabaseConnection,
    section: MenuSection,
    name: &str,
    price: Decimal,
    category: &str,
) -> Result<entities::menu_item::Model> {
    catalog::create_menu_item(
        db,
        section,
        NewMenuItem {
            category: category.to_string(),
            ..new_test_item(name, price)
        },
    )
    .await
}
