//! Document storage for the blog post API.
//!
//! A store is a set of named collections, each holding documents of one
//! type keyed by id. This crate defines the storage contract and an
//! in-memory backend.
//!
//! # Storage Backends
//!
//! All backends implement the [`Collection`] trait:
//!
//! - [`InMemoryCollection`] -- `HashMap`-based collection for tests and embedding
//!
//! # Design Rules
//!
//! 1. An absent id is `Ok(None)` / `Ok(false)`, never an error.
//! 2. Unique fields are checked on every insert and update. `None` values
//!    are not indexed, so any number of documents may omit a unique field.
//! 3. `update` applies its mutation under the collection's write lock;
//!    a rejected mutation leaves the stored document untouched.
//! 4. `find` returns documents in insertion order.
//! 5. The store never joins across collections. Resolving references is
//!    the caller's job.

pub mod document;
pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryCollection;
pub use traits::{Collection, Document};
