use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error envelope returned by every API route: `{"error": message}`
/// with the status carrying the error kind.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({ "success": false, "error": self.message })))
            .into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        use models::errors::ModelError;
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(ModelError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Db(msg) | ServiceError::Model(ModelError::Db(msg)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}
