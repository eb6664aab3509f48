//! Cart route handlers.

use crate::core::cart::{self, CartAction, QuantityOutcome};
use crate::entities::MenuSection;
use crate::errors::Result;
use crate::http::extract::AuthUser;
use crate::http::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::info;

/// `POST /cart/add/{section}/{id}` - add a menu item to the caller's cart.
///
/// Responds 201 when a new line was created, 200 when an existing line was
/// incremented; the message distinguishes the two.
pub async fn add(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((section, id)): Path<(String, i64)>,
) -> Result<impl IntoResponse> {
    let section: MenuSection = section.parse()?;
    let outcome = cart::add_to_cart(&state.database, &user, section, id).await?;

    let (status, message) = if outcome.created {
        info!(user, %section, id, "cart line created");
        (
            StatusCode::CREATED,
            format!("{} added to cart.", outcome.line.item_name),
        )
    } else {
        info!(user, %section, id, quantity = outcome.line.quantity, "cart line incremented");
        (
            StatusCode::OK,
            format!("{} quantity updated in cart.", outcome.line.item_name),
        )
    };

    Ok((status, Json(json!({ "message": message, "line": outcome.line }))))
}

/// `GET /cart` - the caller's cart with subtotals, total, and line count.
pub async fn view(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse> {
    let cart = cart::view_cart(&state.database, &user).await?;
    Ok(Json(cart))
}

/// `POST /cart/update/{id}/{action}` - apply a quantity action to one line.
///
/// An unrecognized action is rejected before anything is looked up or
/// mutated.
pub async fn update_quantity(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, action)): Path<(i64, String)>,
) -> Result<impl IntoResponse> {
    let action: CartAction = action.parse()?;

    let body = match cart::update_quantity(&state.database, &user, id, action).await? {
        QuantityOutcome::Updated(line) => json!({ "message": "Cart updated", "line": line }),
        QuantityOutcome::Removed => json!({ "message": "Item removed from cart" }),
    };

    Ok(Json(body))
}

/// `POST /cart/clear` - delete every line in the caller's cart.
pub async fn clear(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse> {
    let removed = cart::clear_cart(&state.database, &user).await?;
    info!(user, removed, "cart cleared");
    Ok(Json(json!({ "message": "Cart cleared!", "removed": removed })))
}
