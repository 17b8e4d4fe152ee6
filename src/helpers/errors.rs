use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors a request can end with. Every variant is terminal; nothing is
/// retried and no partial entity is left behind.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed identifier or request body
    #[error("{0}")]
    Validation(String),
    /// Unknown identifier
    #[error("{0}")]
    NotFound(String),
    /// Missing or unusable credential, checked before any mutation
    #[error("{0}")]
    Unauthorized(String),
    /// Unexpected failure; the cause is logged, never sent to the client
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::Internal(err) => {
                tracing::error!("request failed: {:?}", err);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
