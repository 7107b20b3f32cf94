/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document with this id is already stored.
    #[error("duplicate id in {collection}: {id}")]
    DuplicateId { collection: &'static str, id: String },

    /// Another document already holds this value of a unique field.
    #[error("duplicate value for unique field {collection}.{field}: {value}")]
    UniqueViolation {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    /// An update tried to change a document's id.
    #[error("document id is immutable in {collection}: {id}")]
    ImmutableId { collection: &'static str, id: String },

    /// Storage backend is unreachable or in an unusable state.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
