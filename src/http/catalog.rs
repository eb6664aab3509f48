//! Menu catalog route handlers.
//!
//! Reads are public; create/update/delete require an authenticated user.
//! Prices arrive as decimal strings ("9.99") and `prepared_time` as
//! "HH:MM:SS".

use crate::core::catalog::{self, NewMenuItem};
use crate::entities::MenuSection;
use crate::errors::{Error, Result};
use crate::http::extract::AuthUser;
use crate::http::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Request body for creating or replacing a menu item
#[derive(Debug, Deserialize)]
pub struct MenuItemForm {
    /// Item name
    pub name: String,
    /// Price as a decimal string, e.g. "9.99"
    pub price: Decimal,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Short category label
    #[serde(default)]
    pub category: String,
    /// Image URL
    #[serde(default)]
    pub image_url: String,
    /// Whether the item is orderable; defaults to true
    #[serde(default = "default_available")]
    pub is_available: bool,
    /// Time of day the item is ready by, as "HH:MM:SS"; defaults to midnight
    #[serde(default)]
    pub prepared_time: Option<String>,
}

const fn default_available() -> bool {
    true
}

impl MenuItemForm {
    fn into_new_item(self) -> Result<NewMenuItem> {
        let prepared_time = match self.prepared_time {
            Some(raw) => NaiveTime::parse_from_str(&raw, "%H:%M:%S").map_err(|e| Error::Config {
                message: format!("Invalid prepared_time: {e}"),
            })?,
            None => NaiveTime::MIN,
        };

        Ok(NewMenuItem {
            name: self.name,
            price: self.price.round_dp(2),
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            is_available: self.is_available,
            prepared_time,
        })
    }
}

/// `GET /menu` - the whole menu, section by section.
pub async fn list_menu(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = catalog::list_menu(&state.database).await?;
    Ok(Json(items))
}

/// `GET /menu/{section}` - all items of one section, newest first.
pub async fn list_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    let items = catalog::list_section(&state.database, section).await?;
    Ok(Json(items))
}

/// `GET /menu/{section}/{id}` - one menu item.
pub async fn get_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, i64)>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    let item = catalog::get_menu_item(&state.database, section, id)
        .await?
        .ok_or_else(|| Error::MenuItemNotFound {
            section: section.to_string(),
            id,
        })?;
    Ok(Json(item))
}

/// `POST /menu/{section}` - add a menu item (admin).
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(section): Path<String>,
    Json(form): Json<MenuItemForm>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    let item = catalog::create_menu_item(&state.database, section, form.into_new_item()?).await?;
    info!(user, %section, id = item.id, "menu item added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Menu item added successfully.", "item": item })),
    ))
}

/// `PUT /menu/{section}/{id}` - replace a menu item's fields (admin).
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((section, id)): Path<(String, i64)>,
    Json(form): Json<MenuItemForm>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    let item =
        catalog::update_menu_item(&state.database, section, id, form.into_new_item()?).await?;
    info!(user, %section, id, "menu item updated");
    Ok(Json(
        json!({ "message": "Menu item updated successfully.", "item": item }),
    ))
}

/// `DELETE /menu/{section}/{id}` - remove a menu item (admin).
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((section, id)): Path<(String, i64)>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    catalog::delete_menu_item(&state.database, section, id).await?;
    info!(user, %section, id, "menu item deleted");
    Ok(Json(json!({ "message": "Menu item deleted successfully." })))
}
