//! Request bodies accepted by the create and update operations.
//!
//! ```text
//! POST /posts     {"title":"Hello","content":"World",
//!                  "author":{"firstName":"Ada","lastName":"Lovelace"}}
//! PUT  /posts/:id {"content":"oops","author":{"firstName":"Ryan"}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::Author;
use crate::comment::Comment;
use crate::error::TypeError;
use crate::id::PostId;
use crate::post::BlogPost;

/// Author sub-object of a create request. Always becomes a fresh
/// [`Author`] record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthor {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<NewAuthor>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: NewAuthor) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: Some(author),
            created: None,
            comments: Vec::new(),
        }
    }

    /// Check required fields. Nothing may be written when this fails.
    pub fn validate(&self) -> Result<(), TypeError> {
        match self.title.as_deref() {
            None => return Err(TypeError::MissingField("title")),
            Some(t) if t.trim().is_empty() => return Err(TypeError::EmptyField("title")),
            Some(_) => {}
        }
        if self.author.is_none() {
            return Err(TypeError::MissingField("author"));
        }
        Ok(())
    }

    /// Validate and split into the author record to create and the post that
    /// references it.
    pub fn build(self) -> Result<(Author, BlogPost), TypeError> {
        self.validate()?;
        let NewPost {
            title,
            content,
            author,
            created,
            comments,
        } = self;
        let new_author = author.ok_or(TypeError::MissingField("author"))?;
        let title = title.ok_or(TypeError::MissingField("title"))?;

        let mut author = Author::new(new_author.first_name, new_author.last_name);
        author.user_name = new_author.user_name;

        let mut post =
            BlogPost::new(author.id, title, content.unwrap_or_default()).with_comments(comments);
        if let Some(created) = created {
            post = post.with_created(created);
        }
        Ok((author, post))
    }
}

impl NewAuthor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_name: None,
        }
    }
}

/// Author sub-object of an update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatch {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Overwrite the supplied name fields in place.
    pub fn apply(&self, author: &mut Author) {
        if let Some(first) = &self.first_name {
            author.first_name = first.clone();
        }
        if let Some(last) = &self.last_name {
            author.last_name = last.clone();
        }
    }
}

/// Body of `PUT /posts/:id`. Only supplied fields are changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    /// Optional echo of the path id. Must match when present.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorPatch>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl PostPatch {
    pub fn validate(&self, path_id: &PostId) -> Result<(), TypeError> {
        if let Some(body_id) = &self.id {
            if body_id.parse::<PostId>().ok().as_ref() != Some(path_id) {
                return Err(TypeError::IdMismatch {
                    path: path_id.to_string(),
                    body: body_id.clone(),
                });
            }
        }
        if matches!(self.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(TypeError::EmptyField("title"));
        }
        Ok(())
    }

    /// Author changes to apply to the referenced author, if any.
    pub fn author_changes(&self) -> Option<&AuthorPatch> {
        self.author.as_ref().filter(|a| !a.is_empty())
    }

    /// Overwrite the supplied post fields in place. Author fields are not
    /// touched here; see [`PostPatch::author_changes`].
    pub fn apply(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(created) = self.created {
            post.created = created;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_creates_fresh_author_and_linked_post() {
        let req = NewPost::new("Hello", "World", NewAuthor::new("Ada", "Lovelace"));
        let (author, post) = req.build().unwrap();
        assert_eq!(post.author, author.id);
        assert_eq!(author.first_name, "Ada");
        assert_eq!(author.last_name, "Lovelace");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.comments.is_empty());
    }

    #[test]
    fn build_keeps_supplied_created() {
        let created: DateTime<Utc> = "2030-01-02T03:04:05Z".parse().unwrap();
        let mut req = NewPost::new("t", "c", NewAuthor::new("A", "B"));
        req.created = Some(created);
        let (_, post) = req.build().unwrap();
        assert_eq!(post.created, created);
    }

    #[test]
    fn missing_title_is_rejected() {
        let req: NewPost =
            serde_json::from_value(json!({"content": "x", "author": {"firstName": "A"}})).unwrap();
        assert_eq!(req.validate(), Err(TypeError::MissingField("title")));
    }

    #[test]
    fn blank_title_is_rejected() {
        let req = NewPost::new("   ", "c", NewAuthor::new("A", "B"));
        assert_eq!(req.build().unwrap_err(), TypeError::EmptyField("title"));
    }

    #[test]
    fn missing_author_is_rejected() {
        let req: NewPost = serde_json::from_value(json!({"title": "t"})).unwrap();
        assert_eq!(req.validate(), Err(TypeError::MissingField("author")));
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let req: NewPost =
            serde_json::from_value(json!({"title": "t", "author": {"firstName": "A"}})).unwrap();
        let (author, post) = req.build().unwrap();
        assert_eq!(post.content, "");
        assert_eq!(author.last_name, "");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut post = BlogPost::new(Author::new("A", "B").id, "title", "content");
        let created = post.created;
        let patch: PostPatch = serde_json::from_value(json!({"content": "oops"})).unwrap();
        patch.apply(&mut post);
        assert_eq!(post.title, "title");
        assert_eq!(post.content, "oops");
        assert_eq!(post.created, created);
    }

    #[test]
    fn author_patch_updates_in_place() {
        let mut author = Author::new("Ada", "Lovelace");
        let id = author.id;
        let patch = AuthorPatch {
            first_name: Some("Ryan".into()),
            last_name: None,
        };
        patch.apply(&mut author);
        assert_eq!(author.id, id);
        assert_eq!(author.first_name, "Ryan");
        assert_eq!(author.last_name, "Lovelace");
    }

    #[test]
    fn empty_author_patch_is_ignored() {
        let patch: PostPatch = serde_json::from_value(json!({"author": {}})).unwrap();
        assert!(patch.author_changes().is_none());
    }

    #[test]
    fn patch_id_must_match_path() {
        let path = PostId::new();
        let ok = PostPatch {
            id: Some(path.to_string()),
            ..Default::default()
        };
        assert!(ok.validate(&path).is_ok());

        let bad = PostPatch {
            id: Some(PostId::new().to_string()),
            ..Default::default()
        };
        assert!(matches!(bad.validate(&path), Err(TypeError::IdMismatch { .. })));
    }

    #[test]
    fn patch_rejects_blank_title() {
        let patch = PostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(patch.validate(&PostId::new()), Err(TypeError::EmptyField("title")));
    }
}
