use thiserror::Error;

/// Errors produced while parsing or validating model types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: String, body: String },

    #[error("post {post} references author {expected}, got {actual}")]
    AuthorMismatch {
        post: String,
        expected: String,
        actual: String,
    },
}

impl TypeError {
    /// Returns `true` for errors caused by caller input rather than an
    /// internal invariant.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::AuthorMismatch { .. })
    }
}
