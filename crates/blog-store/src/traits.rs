use std::fmt;
use std::hash::Hash;

use crate::error::StoreResult;

/// A record that can be stored in a [`Collection`].
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier type; unique within the collection.
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// Collection name, used in errors and logs.
    const COLLECTION: &'static str;

    fn id(&self) -> Self::Id;

    /// Values of fields that must be unique across the collection, as
    /// `(field, value)` pairs. Fields without a value are left out.
    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}

/// A collection of documents of one type.
///
/// All implementations must satisfy these invariants:
/// - Reads of an absent id return `Ok(None)` rather than an error.
/// - Unique fields declared by [`Document::unique_fields`] hold after every
///   successful write.
/// - `update` is atomic per document: the mutation is applied and checked
///   before anything becomes visible to other callers.
/// - Storage failures are propagated, never silently ignored.
pub trait Collection<D: Document>: Send + Sync {
    /// Store a new document and return its id.
    ///
    /// Fails if the id is already present or a unique field value is taken.
    fn insert(&self, doc: D) -> StoreResult<D::Id>;

    /// All documents, in insertion order.
    fn find(&self) -> StoreResult<Vec<D>>;

    /// Read a document by id.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    fn find_by_id(&self, id: &D::Id) -> StoreResult<Option<D>>;

    /// Apply `apply` to the document with this id and store the result.
    ///
    /// Returns the updated document, or `Ok(None)` if no such document
    /// exists. The closure must not change the id.
    fn update(&self, id: &D::Id, apply: &mut dyn FnMut(&mut D)) -> StoreResult<Option<D>>;

    /// Delete a document by id. Returns `true` if the document existed.
    fn delete(&self, id: &D::Id) -> StoreResult<bool>;

    /// Number of documents in the collection.
    fn count(&self) -> StoreResult<usize>;
}
