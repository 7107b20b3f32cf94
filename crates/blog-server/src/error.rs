//! Mapping from repository failures to HTTP responses.
//!
//! Error bodies are `{"code": "...", "message": "..."}`. Internal errors are
//! logged in full and redacted in the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use blog_sdk::{ErrorKind, SdkError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn code_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "invalid_request",
        ErrorKind::NotFound => "not_found",
        ErrorKind::Conflict => "conflict",
        ErrorKind::Internal => "internal_error",
    }
}

impl ServerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Sdk(e) => e.kind(),
            Self::InvalidRequest(_) | Self::PayloadTooLarge(_) => ErrorKind::Validation,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => status_for(self.kind()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::PayloadTooLarge(_) => "payload_too_large",
            _ => code_for(self.kind()),
        }
    }

    /// Response body; internal details never leave the process.
    pub fn body(&self) -> ErrorBody {
        let message = match self.kind() {
            ErrorKind::Internal => "internal server error".to_string(),
            _ => self.to_string(),
        };
        ErrorBody {
            code: self.code().to_string(),
            message,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_sdk::{PostId, StoreError};
    use blog_types::TypeError;

    #[test]
    fn validation_is_bad_request() {
        let err = ServerError::from(SdkError::from(TypeError::MissingField("title")));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = err.body();
        assert_eq!(body.code, "invalid_request");
        assert!(body.message.contains("title"));
    }

    #[test]
    fn not_found() {
        let err = ServerError::from(SdkError::PostNotFound(PostId::new()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().code, "not_found");
    }

    #[test]
    fn unique_violation_is_conflict() {
        let err = ServerError::from(SdkError::from(StoreError::UniqueViolation {
            collection: "authors",
            field: "userName",
            value: "ada".into(),
        }));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_errors_are_redacted() {
        let err = ServerError::from(SdkError::from(StoreError::Unavailable(
            "secret connection string".into(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.code, "internal_error");
        assert!(!body.message.contains("secret"));
    }

    #[test]
    fn invalid_request_message_is_kept() {
        let err = ServerError::InvalidRequest("bad id".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "invalid request: bad id");
    }

    #[test]
    fn oversized_body_is_payload_too_large() {
        let err = ServerError::PayloadTooLarge("length limit exceeded".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.body().code, "payload_too_large");
    }
}
