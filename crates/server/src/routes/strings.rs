use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use query::{parse_contains_character, FilterSpec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::StringRecord;

/// Request body for analyzing and storing a string
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    /// The original string value to be analyzed
    pub value: String,
}

/// Raw query parameters for structured filtering.
///
/// `containsCharacter` arrives as a string and is only narrowed to a
/// single character during validation; everything else deserializes
/// straight into the core types.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<String>,
}

impl FilterParams {
    /// Validate raw parameters into a core filter. Rejects an inverted
    /// length window and a multi-character (or empty) character filter
    /// before the core ever evaluates the spec.
    pub fn into_spec(self) -> ServerResult<FilterSpec> {
        let contains_character = self
            .contains_character
            .as_deref()
            .map(parse_contains_character)
            .transpose()?;

        let spec = FilterSpec {
            is_palindrome: self.is_palindrome,
            min_length: self.min_length,
            max_length: self.max_length,
            word_count: self.word_count,
            contains_character,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Response for filtered listings: matching records plus the filter that
/// produced them, echoed back so clients can see how their request (or
/// free-text phrase) was understood.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: FilterSpec,
}

/// Analyze and store a new string
///
/// Returns 201 with the stored record, or 409 when a record for the same
/// value (same content hash) already exists.
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<CreateStringRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.value.is_empty() {
        return Err(ServerError::BadRequest("value must not be empty".to_string()));
    }

    let record = stringprops::ingest_value(&state.store, &request.value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Retrieve a record by its content hash
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<StringRecord>> {
    Ok(Json(state.store.get(&id)?))
}

/// Delete a record by its content hash
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    state.store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all records, optionally filtered
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<FilterParams>,
) -> ServerResult<Json<FilterResponse>> {
    let spec = params.into_spec()?;
    let data = stringprops::filter_records(&state.store, &spec)?;
    Ok(Json(FilterResponse {
        count: data.len(),
        data,
        interpreted_query: spec,
    }))
}
