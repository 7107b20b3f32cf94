use std::collections::HashMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::{Collection, Document};

struct Inner<D: Document> {
    docs: HashMap<D::Id, D>,
    order: Vec<D::Id>,
}

impl<D: Document> Inner<D> {
    /// First unique-field clash between `candidate` and any stored document
    /// other than `skip`.
    fn conflict(&self, candidate: &D, skip: Option<&D::Id>) -> Option<StoreError> {
        let wanted = candidate.unique_fields();
        if wanted.is_empty() {
            return None;
        }
        for (id, other) in &self.docs {
            if skip == Some(id) {
                continue;
            }
            for (field, value) in other.unique_fields() {
                if wanted.iter().any(|(f, v)| *f == field && *v == value) {
                    return Some(StoreError::UniqueViolation {
                        collection: D::COLLECTION,
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }
        None
    }
}

/// In-memory, HashMap-based document collection.
///
/// Intended for tests and embedding. Documents are held behind a `RwLock`
/// and cloned on read and write. Insertion order is tracked separately so
/// [`Collection::find`] is stable.
pub struct InMemoryCollection<D: Document> {
    inner: RwLock<Inner<D>>,
}

impl<D: Document> InMemoryCollection<D> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                docs: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner<D>>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(format!("{} lock poisoned: {e}", D::COLLECTION)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner<D>>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(format!("{} lock poisoned: {e}", D::COLLECTION)))
    }
}

impl<D: Document> Default for InMemoryCollection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> Collection<D> for InMemoryCollection<D> {
    fn insert(&self, doc: D) -> StoreResult<D::Id> {
        let id = doc.id();
        let mut inner = self.write()?;
        if inner.docs.contains_key(&id) {
            return Err(StoreError::DuplicateId {
                collection: D::COLLECTION,
                id: id.to_string(),
            });
        }
        if let Some(err) = inner.conflict(&doc, None) {
            return Err(err);
        }
        inner.order.push(id);
        inner.docs.insert(id, doc);
        debug!(collection = D::COLLECTION, %id, "document inserted");
        Ok(id)
    }

    fn find(&self) -> StoreResult<Vec<D>> {
        let inner = self.read()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.docs.get(id).cloned())
            .collect())
    }

    fn find_by_id(&self, id: &D::Id) -> StoreResult<Option<D>> {
        let inner = self.read()?;
        Ok(inner.docs.get(id).cloned())
    }

    fn update(&self, id: &D::Id, apply: &mut dyn FnMut(&mut D)) -> StoreResult<Option<D>> {
        let mut inner = self.write()?;
        let Some(current) = inner.docs.get(id) else {
            return Ok(None);
        };
        let mut updated = current.clone();
        apply(&mut updated);
        if updated.id() != *id {
            return Err(StoreError::ImmutableId {
                collection: D::COLLECTION,
                id: id.to_string(),
            });
        }
        if let Some(err) = inner.conflict(&updated, Some(id)) {
            return Err(err);
        }
        inner.docs.insert(*id, updated.clone());
        debug!(collection = D::COLLECTION, %id, "document updated");
        Ok(Some(updated))
    }

    fn delete(&self, id: &D::Id) -> StoreResult<bool> {
        let mut inner = self.write()?;
        let existed = inner.docs.remove(id).is_some();
        if existed {
            inner.order.retain(|k| k != id);
            debug!(collection = D::COLLECTION, %id, "document deleted");
        }
        Ok(existed)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.docs.len())
    }
}

impl<D: Document> fmt::Debug for InMemoryCollection<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.count().unwrap_or_default();
        f.debug_struct("InMemoryCollection")
            .field("collection", &D::COLLECTION)
            .field("document_count", &count)
            .finish()
    }
}
