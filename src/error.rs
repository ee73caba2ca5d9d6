//! Error taxonomy for the record store and the services built on it, plus
//! the HTTP mapping used by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::protocol::ErrorOut;

/// Failures surfaced by `ProgressStore` implementations and write paths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("No user in session")]
    MissingUser,

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Handler-level error; every variant renders as `{ "error": "..." }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::MissingUser) => StatusCode::UNAUTHORIZED,
            ApiError::Store(StoreError::UnknownScenario(_)) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(target: "logic2code_backend", error = %self, "Request failed");
        }
        (status, Json(ErrorOut { error: self.to_string() })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_statuses() {
        assert_eq!(ApiError::from(StoreError::MissingUser).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(StoreError::UnknownScenario("x".into())).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::Unavailable("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::BadRequest("bad".into()).status(), StatusCode::BAD_REQUEST);
    }
}
