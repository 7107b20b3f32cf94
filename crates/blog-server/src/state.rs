use blog_sdk::Blog;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub blog: Blog,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(blog: Blog) -> Self {
        Self {
            blog,
            max_body_bytes: ServerConfig::default().max_body_bytes,
        }
    }

    pub fn with_body_limit(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
