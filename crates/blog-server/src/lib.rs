//! HTTP server for the blog post API.
//!
//! Exposes list / create / update / delete over JSON. Handlers are thin:
//! they parse the request, call the [`Blog`](blog_sdk::Blog) repository,
//! and turn its result into a status code and body.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorBody, ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::build_router;
pub use server::BlogServer;
pub use state::AppState;
