use crate::error::{ServerError, ServerResult};
use crate::routes::strings::FilterResponse;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the free-text search endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NlpQueryParams {
    /// Free-text phrase, e.g. "palindromic strings longer than 10"
    pub query: Option<String>,
}

/// Retrieve records matching a free-text phrase
///
/// The phrase runs through the heuristic interpreter; the resulting filter
/// is echoed back as `interpretedQuery`. A phrase that matches none of the
/// interpreter's patterns is a client error (400 `QUERY_UNINTERPRETABLE`),
/// as is a missing or blank `query` parameter.
pub async fn nlp_query(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NlpQueryParams>,
) -> ServerResult<Json<FilterResponse>> {
    let text = params.query.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "query parameter is required".to_string(),
        ));
    }

    let outcome = stringprops::query_records(&state.store, &text)?;
    Ok(Json(FilterResponse {
        count: outcome.records.len(),
        data: outcome.records,
        interpreted_query: outcome.spec,
    }))
}
