//! Payment business logic - the confirmation stub over the cart.
//!
//! No payment provider is integrated. Checkout reproduces the cart with its
//! grand total for the payment page, refusing to proceed with an empty cart;
//! the success acknowledgement is static.

use crate::{
    core::cart::{self, CartView},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Builds the checkout summary for the payment page.
///
/// Returns `None` when the user's cart is empty, which the caller surfaces
/// as a warning rather than an error.
pub async fn checkout(db: &DatabaseConnection, user_id: &str) -> Result<Option<CartView>> {
    let view = cart::view_cart(db, user_id).await?;
    if view.lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(view))
}
