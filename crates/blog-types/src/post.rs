use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::{display_name, Author};
use crate::comment::Comment;
use crate::error::TypeError;
use crate::id::{AuthorId, PostId};

/// A stored blog post.
///
/// The author is held by reference only. Use [`BlogPost::view`] with the
/// resolved [`Author`] to produce the external representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub author: AuthorId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl BlogPost {
    /// Create a post with a fresh id, no comments, and `created` set to now.
    pub fn new(author: AuthorId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            author,
            title: title.into(),
            content: content.into(),
            created: Utc::now(),
            comments: Vec::new(),
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Build the external representation of this post.
    ///
    /// `author` must be the record this post references; anything else means
    /// the join was skipped or went wrong, and is reported as
    /// [`TypeError::AuthorMismatch`].
    pub fn view(&self, author: &Author) -> Result<PostView, TypeError> {
        if author.id != self.author {
            return Err(TypeError::AuthorMismatch {
                post: self.id.to_string(),
                expected: self.author.to_string(),
                actual: author.id.to_string(),
            });
        }
        Ok(PostView {
            id: self.id,
            author: display_name(author),
            content: self.content.clone(),
            title: self.title.clone(),
            created: self.created,
            comments: self.comments.clone(),
        })
    }
}

/// A post as returned over HTTP: `{id, author, content, title, created, comments}`,
/// where `author` is the author's display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub author: String,
    pub content: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub comments: Vec<Comment>,
}
