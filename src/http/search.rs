//! Search route handler.

use crate::core::search as core_search;
use crate::errors::Result;
use crate::http::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

/// Query string parameters for `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; blank or absent yields a warning, not an error
    #[serde(default)]
    pub query: String,
}

/// `GET /search?query=...` - search the catalog.
///
/// An empty query is a no-op success carrying a warning message.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let outcome = core_search::search(&state.database, &params.query).await?;

    if outcome.query.is_empty() {
        return Ok(Json(json!({
            "query": "",
            "results": [],
            "warning": "Search query cannot be empty.",
        })));
    }

    Ok(Json(json!({
        "query": outcome.query,
        "results": outcome.results,
    })))
}
