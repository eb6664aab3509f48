//! Catalog business logic - Handles all menu item operations.
//!
//! Provides the read operations the cart and search consume, plus the
//! administrative create/update/delete operations. Every lookup is scoped by
//! `(section, id)`, so an id addressed under the wrong section is treated as
//! absent. All functions are async and return Result types for error handling.

use crate::{
    entities::{menu_item, MenuItem, MenuSection},
    errors::{Error, Result},
};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields for creating or fully replacing a menu item.
///
/// The section and the creation timestamp are managed by the operations
/// themselves and are not part of the form.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    /// Item name
    pub name: String,
    /// Price in currency units, two fractional digits
    pub price: Decimal,
    /// Free-text description
    pub description: String,
    /// Short category label
    pub category: String,
    /// Image URL
    pub image_url: String,
    /// Whether the item is currently orderable
    pub is_available: bool,
    /// Time of day the kitchen has the item ready by
    pub prepared_time: NaiveTime,
}

/// Finds a menu item by section and id, returning None when absent.
///
/// An id that exists under a different section is None: menu item identity
/// is always the `(section, id)` pair.
pub async fn get_menu_item(
    db: &DatabaseConnection,
    section: MenuSection,
    id: i64,
) -> Result<Option<menu_item::Model>> {
    MenuItem::find_by_id(id)
        .filter(menu_item::Column::Section.eq(section))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all items of one section, newest first.
pub async fn list_section(
    db: &DatabaseConnection,
    section: MenuSection,
) -> Result<Vec<menu_item::Model>> {
    MenuItem::find()
        .filter(menu_item::Column::Section.eq(section))
        .order_by_desc(menu_item::Column::AddedOn)
        .order_by_desc(menu_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole menu, section by section in display order.
pub async fn list_menu(db: &DatabaseConnection) -> Result<Vec<menu_item::Model>> {
    let mut items = Vec::new();
    for section in MenuSection::ALL {
        items.extend(list_section(db, section).await?);
    }
    Ok(items)
}

/// Creates a new menu item in the given section, performing input validation.
///
/// The name must be non-empty after trimming and the price non-negative.
/// The creation timestamp is set to the current moment.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    section: MenuSection,
    fields: NewMenuItem,
) -> Result<menu_item::Model> {
    validate_fields(&fields)?;

    let item = menu_item::ActiveModel {
        section: Set(section),
        name: Set(fields.name.trim().to_string()),
        price: Set(fields.price),
        description: Set(fields.description),
        category: Set(fields.category),
        image_url: Set(fields.image_url),
        is_available: Set(fields.is_available),
        prepared_time: Set(fields.prepared_time),
        added_on: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Replaces the editable fields of an existing menu item.
///
/// The creation timestamp is preserved. Fails with `MenuItemNotFound` when
/// the `(section, id)` pair does not reference an item.
pub async fn update_menu_item(
    db: &DatabaseConnection,
    section: MenuSection,
    id: i64,
    fields: NewMenuItem,
) -> Result<menu_item::Model> {
    validate_fields(&fields)?;

    let existing = get_menu_item(db, section, id)
        .await?
        .ok_or_else(|| not_found(section, id))?;

    let mut item: menu_item::ActiveModel = existing.into();
    item.name = Set(fields.name.trim().to_string());
    item.price = Set(fields.price);
    item.description = Set(fields.description);
    item.category = Set(fields.category);
    item.image_url = Set(fields.image_url);
    item.is_available = Set(fields.is_available);
    item.prepared_time = Set(fields.prepared_time);

    item.update(db).await.map_err(Into::into)
}

/// Deletes a menu item. Existing cart lines that reference it keep their
/// snapshot and are not touched.
pub async fn delete_menu_item(db: &DatabaseConnection, section: MenuSection, id: i64) -> Result<()> {
    let existing = get_menu_item(db, section, id)
        .await?
        .ok_or_else(|| not_found(section, id))?;

    existing.delete(db).await?;
    Ok(())
}

fn validate_fields(fields: &NewMenuItem) -> Result<()> {
    if fields.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Menu item name cannot be empty".to_string(),
        });
    }

    if fields.price.is_sign_negative() {
        return Err(Error::InvalidPrice {
            price: fields.price,
        });
    }

    Ok(())
}

fn not_found(section: MenuSection, id: i64) -> Error {
    Error::MenuItemNotFound {
        section: section.to_string(),
        id,
    }
}
