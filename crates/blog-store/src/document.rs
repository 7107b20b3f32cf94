//! [`Document`] implementations for the blog model.

use blog_types::{Author, AuthorId, BlogPost, PostId};

use crate::traits::Document;

impl Document for Author {
    type Id = AuthorId;

    const COLLECTION: &'static str = "authors";

    fn id(&self) -> AuthorId {
        self.id
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        self.user_name
            .as_deref()
            .map(|name| vec![("userName", name)])
            .unwrap_or_default()
    }
}

impl Document for BlogPost {
    type Id = PostId;

    const COLLECTION: &'static str = "blogposts";

    fn id(&self) -> PostId {
        self.id
    }
}
