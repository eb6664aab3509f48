//! HTTP layer - the JSON interface over the core operations.
//!
//! Thin axum handlers over `core::*`: each route parses its inputs, calls
//! one core operation, and wraps the result in a JSON body with a
//! user-facing message. Route strings are presentational detail; the
//! contract is the operation set.

/// Cart route handlers
pub mod cart;
/// Menu catalog route handlers
pub mod catalog;
/// Request extractors (authenticated user identity)
pub mod extract;
/// Payment stub route handlers
pub mod payment;
/// Search route handler
pub mod search;

use crate::errors::Result;
use axum::routing::{get, post};
use axum::Router;
use sea_orm::DatabaseConnection;

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the application router with all routes registered.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(catalog::list_menu))
        .route(
            "/menu/{section}",
            get(catalog::list_section).post(catalog::create_item),
        )
        .route(
            "/menu/{section}/{id}",
            get(catalog::get_item)
                .put(catalog::update_item)
                .delete(catalog::delete_item),
        )
        .route("/cart", get(cart::view))
        .route("/cart/add/{section}/{id}", post(cart::add))
        .route("/cart/update/{id}/{action}", post(cart::update_quantity))
        .route("/cart/clear", post(cart::clear))
        .route("/search", get(search::search))
        .route("/payment", get(payment::checkout))
        .route("/payment/success", get(payment::success))
        .with_state(state)
}

/// Serves the application on the given listener until the process exits.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state)).await.map_err(Into::into)
}
