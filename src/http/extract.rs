//! Request extractors.
//!
//! Identity is an external capability here: an upstream auth proxy
//! authenticates the caller and forwards their id in a request header. The
//! service itself stores no credentials.

use crate::errors::Error;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the authenticated user id, set by the auth proxy
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user's identity.
///
/// Rejects the request with `Unauthorized` when the header is missing,
/// unreadable, or empty.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Self(id.to_string()))
            .ok_or(Error::Unauthorized)
    }
}
