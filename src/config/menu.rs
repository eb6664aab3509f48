//! Menu seeding from a TOML configuration file.
//!
//! The items defined in `menu.toml` are used to populate the catalog on first
//! run. Seeding only happens while the catalog is empty, so a deployment that
//! has edited its menu through the admin endpoints is never overwritten.

use crate::core::catalog::{self, NewMenuItem};
use crate::entities::{MenuItem, MenuSection};
use crate::errors::{Error, Result};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Deserialize;
use std::path::Path;

/// Default location of the menu seed file
pub const DEFAULT_MENU_PATH: &str = "menu.toml";

/// Configuration structure representing the entire menu.toml file
#[derive(Debug, Deserialize)]
pub struct MenuConfig {
    /// List of menu items to seed
    pub items: Vec<MenuItemConfig>,
}

/// Configuration for a single menu item
#[derive(Debug, Deserialize, Clone)]
pub struct MenuItemConfig {
    /// Name of the item
    pub name: String,
    /// Section the item is listed under ("nonveg", "veg", "starter", "cooldrink")
    pub section: MenuSection,
    /// Price in currency units
    pub price: f64,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Short category label (e.g., "biryani", "soda")
    #[serde(default)]
    pub category: String,
    /// URL of the item's image
    #[serde(default)]
    pub image_url: String,
    /// Time of day the item is ready by, as "HH:MM:SS"; defaults to midnight
    #[serde(default)]
    pub prepared_time: Option<String>,
}

/// Loads a menu configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MenuConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read menu file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu.toml: {e}"),
    })
}

/// Loads the menu configuration from the default location (./menu.toml)
pub fn load_default_config() -> Result<MenuConfig> {
    load_config(DEFAULT_MENU_PATH)
}

/// Seeds the catalog from the given configuration if it is currently empty.
///
/// Returns the number of items inserted; 0 means the catalog already had
/// items and was left untouched.
pub async fn seed_menu(db: &DatabaseConnection, config: &MenuConfig) -> Result<u64> {
    if MenuItem::find().count(db).await? > 0 {
        tracing::debug!("Catalog already populated; skipping menu seeding.");
        return Ok(0);
    }

    let mut inserted = 0;
    for item in &config.items {
        catalog::create_menu_item(db, item.section, new_item_from_config(item)?).await?;
        inserted += 1;
    }
    Ok(inserted)
}

fn new_item_from_config(item: &MenuItemConfig) -> Result<NewMenuItem> {
    let price = Decimal::try_from(item.price).map_err(|e| Error::Config {
        message: format!("Invalid price for '{}': {e}", item.name),
    })?;

    let prepared_time = match &item.prepared_time {
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|e| Error::Config {
            message: format!("Invalid prepared_time for '{}': {e}", item.name),
        })?,
        None => NaiveTime::MIN,
    };

    Ok(NewMenuItem {
        name: item.name.clone(),
        price: price.round_dp(2),
        description: item.description.clone(),
        category: item.category.clone(),
        image_url: item.image_url.clone(),
        is_available: true,
        prepared_time,
    })
}
