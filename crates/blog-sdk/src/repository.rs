use std::sync::Arc;

use tracing::{debug, info};

use blog_store::{Collection, InMemoryCollection};
use blog_types::{Author, BlogPost, NewPost, PostId, PostPatch};

use crate::error::{SdkError, SdkResult};
use crate::resolved::ResolvedPost;

/// Blog repository: the author and post collections plus the rules that
/// tie them together.
#[derive(Clone)]
pub struct Blog {
    authors: Arc<dyn Collection<Author>>,
    posts: Arc<dyn Collection<BlogPost>>,
}

impl Blog {
    pub fn new(authors: Arc<dyn Collection<Author>>, posts: Arc<dyn Collection<BlogPost>>) -> Self {
        Self { authors, posts }
    }

    /// Repository backed by empty in-memory collections.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCollection::<Author>::new()),
            Arc::new(InMemoryCollection::<BlogPost>::new()),
        )
    }

    // ---- Reads ----

    /// Fetch one post and join its author.
    ///
    /// Returns `Ok(None)` if the post does not exist. A post whose author
    /// cannot be found is an error, never a partially filled result.
    pub fn fetch_and_resolve(&self, id: &PostId) -> SdkResult<Option<ResolvedPost>> {
        match self.posts.find_by_id(id)? {
            Some(post) => self.resolve(post).map(Some),
            None => Ok(None),
        }
    }

    /// Fetch every post in storage order, each joined with its author.
    pub fn fetch_all_and_resolve(&self) -> SdkResult<Vec<ResolvedPost>> {
        let posts = self.posts.find()?;
        debug!(count = posts.len(), "resolving posts");
        posts.into_iter().map(|post| self.resolve(post)).collect()
    }

    pub fn count_posts(&self) -> SdkResult<usize> {
        Ok(self.posts.count()?)
    }

    fn resolve(&self, post: BlogPost) -> SdkResult<ResolvedPost> {
        let author = self
            .authors
            .find_by_id(&post.author)?
            .ok_or(SdkError::UnresolvedAuthor {
                post: post.id,
                author: post.author,
            })?;
        Ok(ResolvedPost::new(post, author))
    }

    // ---- Writes ----

    /// Create a fresh author from the request's author sub-object, then a
    /// post referencing it.
    ///
    /// The request is validated before anything is written. The two inserts
    /// are not transactional: if the post insert fails, the author stays.
    pub fn create_post(&self, request: NewPost) -> SdkResult<ResolvedPost> {
        let (author, post) = request.build()?;
        self.authors.insert(author.clone())?;
        self.posts.insert(post.clone())?;
        info!(post = %post.id, author = %author.id, "post created");
        Ok(ResolvedPost::new(post, author))
    }

    /// Apply a partial update.
    ///
    /// Only fields present in `patch` change. Author name changes are made
    /// on the referenced author record, which keeps its id. A missing post is
    /// `PostNotFound` whatever the patch holds.
    pub fn update_post(&self, id: &PostId, patch: PostPatch) -> SdkResult<()> {
        let post = self
            .posts
            .find_by_id(id)?
            .ok_or(SdkError::PostNotFound(*id))?;
        patch.validate(id)?;

        if let Some(changes) = patch.author_changes() {
            self.authors
                .update(&post.author, &mut |author: &mut Author| changes.apply(author))?
                .ok_or(SdkError::UnresolvedAuthor {
                    post: post.id,
                    author: post.author,
                })?;
        }

        self.posts
            .update(id, &mut |stored: &mut BlogPost| patch.apply(stored))?
            .ok_or(SdkError::PostNotFound(*id))?;
        info!(post = %id, "post updated");
        Ok(())
    }

    /// Delete a post. Returns `true` if it existed; a missing post is not an
    /// error. The author record is left in place.
    pub fn delete_post(&self, id: &PostId) -> SdkResult<bool> {
        let existed = self.posts.delete(id)?;
        if existed {
            info!(post = %id, "post deleted");
        } else {
            debug!(post = %id, "delete of missing post ignored");
        }
        Ok(existed)
    }
}

impl std::fmt::Debug for Blog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blog")
            .field("posts", &self.posts.count().unwrap_or_default())
            .field("authors", &self.authors.count().unwrap_or_default())
            .finish()
    }
}
