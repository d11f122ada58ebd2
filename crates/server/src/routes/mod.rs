//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the
//! stringprops server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `strings`: Record creation, retrieval, deletion, and structured
//!   filtering
//! - `search`: Free-text query interpretation over stored records

pub mod health;
pub mod search;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Stringprops Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/strings",
            "/strings/{id}",
            "/strings/nlp-query",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
