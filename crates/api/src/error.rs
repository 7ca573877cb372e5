//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prediction_service::ServiceError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Error returned by route handlers, rendered as `{"error": "..."}`
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_validator::ValidationError;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::from(ServiceError::from(ValidationError::MissingField("PM2.5")));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let internal = ApiError(ServiceError::Internal("boom".to_string()));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let grid = ApiError(ServiceError::NotImplemented("Grid prediction"));
        assert_eq!(grid.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
