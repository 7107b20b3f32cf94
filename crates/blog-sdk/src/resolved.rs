use blog_types::{Author, BlogPost, PostView};

use crate::error::SdkResult;

/// A post joined with the author it references.
///
/// Only built by [`Blog`](crate::Blog) read paths, which look the author up
/// by the post's own reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPost {
    post: BlogPost,
    author: Author,
}

impl ResolvedPost {
    pub(crate) fn new(post: BlogPost, author: Author) -> Self {
        Self { post, author }
    }

    pub fn post(&self) -> &BlogPost {
        &self.post
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// External representation with the author's display name.
    pub fn view(&self) -> SdkResult<PostView> {
        Ok(self.post.view(&self.author)?)
    }
}
