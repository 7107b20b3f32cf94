use serde::{Deserialize, Serialize};

use crate::id::AuthorId;

/// A post author.
///
/// Authors are stored in their own collection and referenced from posts by
/// [`AuthorId`]. `user_name`, when set, is unique across all authors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Author {
    /// Create an author with a fresh id and no user name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_name: None,
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

/// The author's name as shown to readers: first and last name joined by a
/// single space, with boundary whitespace trimmed.
pub fn display_name(author: &Author) -> String {
    format!("{} {}", author.first_name, author.last_name)
        .trim()
        .to_string()
}
