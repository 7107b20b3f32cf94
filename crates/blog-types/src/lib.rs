//! Data model for the blog post API.
//!
//! This crate defines the entities stored by the API and the shapes that
//! cross the HTTP boundary. Every other blog crate depends on `blog-types`.
//!
//! # Key Types
//!
//! - [`Author`] — Post author; `userName` is unique when present
//! - [`Comment`] — Embedded comment with no identity of its own
//! - [`BlogPost`] — Stored post referencing its author by [`AuthorId`]
//! - [`PostView`] — External representation with the resolved author name
//! - [`NewPost`] / [`PostPatch`] — Create and partial-update request bodies
//!
//! The author's display name is never stored. It is derived by
//! [`display_name`] at the moment a [`PostView`] is built.

pub mod author;
pub mod comment;
pub mod error;
pub mod id;
pub mod post;
pub mod request;

pub use author::{display_name, Author};
pub use comment::Comment;
pub use error::TypeError;
pub use id::{AuthorId, PostId};
pub use post::{BlogPost, PostView};
pub use request::{AuthorPatch, NewAuthor, NewPost, PostPatch};
