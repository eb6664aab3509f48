//! Payment stub route handlers.

use crate::core::payment;
use crate::errors::Result;
use crate::http::extract::AuthUser;
use crate::http::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// `GET /payment` - the checkout summary for the payment page.
///
/// An empty cart yields a warning rather than a summary.
pub async fn checkout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Value>> {
    match payment::checkout(&state.database, &user).await? {
        Some(cart) => Ok(Json(json!({
            "lines": cart.lines,
            "total": cart.total,
            "count": cart.count,
        }))),
        None => Ok(Json(json!({
            "warning": "Your cart is empty.",
            "lines": [],
            "total": "0.00",
        }))),
    }
}

/// `GET /payment/success` - static acknowledgement; no provider integrated.
pub async fn success(AuthUser(_user): AuthUser) -> Json<Value> {
    Json(json!({ "message": "Payment successful." }))
}
