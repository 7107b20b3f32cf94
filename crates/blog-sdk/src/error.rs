use blog_store::StoreError;
use blog_types::{AuthorId, PostId, TypeError};

/// Broad failure classes, used by callers to pick a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; nothing was written.
    Validation,
    /// The target post does not exist.
    NotFound,
    /// A unique field value is already taken.
    Conflict,
    /// Storage failure or broken invariant.
    Internal,
}

/// SDK-level errors.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("invalid request: {0}")]
    Invalid(#[from] TypeError),

    #[error("post not found: {0}")]
    PostNotFound(PostId),

    #[error("post {post} references missing author {author}")]
    UnresolvedAuthor { post: PostId, author: AuthorId },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(e) if e.is_client_error() => ErrorKind::Validation,
            Self::Invalid(_) => ErrorKind::Internal,
            Self::PostNotFound(_) => ErrorKind::NotFound,
            Self::UnresolvedAuthor { .. } => ErrorKind::Internal,
            Self::Store(StoreError::UniqueViolation { .. }) => ErrorKind::Conflict,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            SdkError::from(TypeError::MissingField("title")).kind(),
            ErrorKind::Validation
        );
        assert_eq!(SdkError::PostNotFound(PostId::new()).kind(), ErrorKind::NotFound);
        assert_eq!(
            SdkError::from(StoreError::UniqueViolation {
                collection: "authors",
                field: "userName",
                value: "ada".into(),
            })
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            SdkError::from(StoreError::Unavailable("down".into())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            SdkError::UnresolvedAuthor {
                post: PostId::new(),
                author: AuthorId::new(),
            }
            .kind(),
            ErrorKind::Internal
        );
    }
}
