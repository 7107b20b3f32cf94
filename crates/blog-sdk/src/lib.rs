//! Repository layer for the blog post API.
//!
//! [`Blog`] composes the author and post collections. Every read that
//! returns a post goes through [`Blog::fetch_and_resolve`] or
//! [`Blog::fetch_all_and_resolve`], which look the author up by id and pair
//! it with the post as a [`ResolvedPost`]. Only a resolved post can be
//! turned into a [`PostView`](blog_types::PostView).

pub mod error;
pub mod repository;
pub mod resolved;
pub mod seed;

pub use error::{ErrorKind, SdkError, SdkResult};
pub use repository::Blog;
pub use resolved::ResolvedPost;

// Re-export key types
pub use blog_types::{
    display_name, Author, AuthorId, AuthorPatch, BlogPost, Comment, NewAuthor, NewPost, PostId,
    PostPatch, PostView,
};
pub use blog_store::{Collection, InMemoryCollection, StoreError};
