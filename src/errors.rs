//! Unified error type for the ordering service.
//!
//! Every fallible operation returns [`Result`]. The HTTP layer converts an
//! [`Error`] into a JSON response with a user-visible message; no error here
//! is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// All errors the service can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was invalid
        message: String,
    },

    /// Underlying SeaORM / database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// No authenticated user identity was supplied with the request
    #[error("Unauthorized: no authenticated user")]
    Unauthorized,

    /// The referenced menu item does not exist in the given section
    #[error("Menu item {id} not found in section '{section}'")]
    MenuItemNotFound {
        /// Section tag the lookup was scoped to
        section: String,
        /// Id that was requested
        id: i64,
    },

    /// The referenced cart line does not exist or belongs to another user
    #[error("Cart line {id} not found")]
    CartLineNotFound {
        /// Id that was requested
        id: i64,
    },

    /// An unrecognized menu section tag was supplied
    #[error("Invalid menu section: '{value}'")]
    InvalidSection {
        /// The tag as received
        value: String,
    },

    /// An unrecognized cart quantity action was supplied
    #[error("Invalid cart action: '{value}'")]
    InvalidAction {
        /// The action as received
        value: String,
    },

    /// A negative price was supplied for a menu item
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The offending price
        price: Decimal,
    },
}

impl Error {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MenuItemNotFound { .. } | Self::CartLineNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidSection { .. }
            | Self::InvalidAction { .. }
            | Self::InvalidPrice { .. }
            | Self::Config { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal details stay in the logs, not in the response body
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            return (status, Json(json!({ "error": "internal server error" }))).into_response();
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
