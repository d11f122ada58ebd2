use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use query::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::StoreError;
use stringprops::ServiceError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::Query(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(StoreError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            ServerError::Store(StoreError::NotFound { .. }) | ServerError::NotFound => {
                StatusCode::NOT_FOUND
            }
            ServerError::Store(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Store(StoreError::AlreadyExists { .. }) => "ALREADY_EXISTS",
            ServerError::Store(StoreError::NotFound { .. }) => "NOT_FOUND",
            ServerError::Query(QueryError::InvalidRange { .. }) => "FILTER_RANGE_INVALID",
            ServerError::Query(QueryError::InvalidCharacterFilter(_)) => {
                "CHARACTER_FILTER_INVALID"
            }
            ServerError::Query(QueryError::Uninterpretable) => "QUERY_UNINTERPRETABLE",
            ServerError::Query(_) | ServerError::Store(_) | ServerError::Internal(_) => {
                "INTERNAL_ERROR"
            }
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<ServiceError> for ServerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(e) => ServerError::Store(e),
            ServiceError::Query(e) => ServerError::Query(e),
        }
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Internal(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}
