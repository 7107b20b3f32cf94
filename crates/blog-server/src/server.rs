use tokio::net::TcpListener;
use tracing::info;

use blog_sdk::Blog;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Blog API server.
pub struct BlogServer {
    config: ServerConfig,
    blog: Blog,
}

impl BlogServer {
    pub fn new(config: ServerConfig, blog: Blog) -> Self {
        Self { config, blog }
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.blog.clone()).with_body_limit(self.config.max_body_bytes))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        if self.config.seed_posts > 0 {
            let ids = self.blog.seed_posts(self.config.seed_posts)?;
            info!(count = ids.len(), "seeded demo posts");
        }
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        info!("blog server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn post_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/posts")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn router_serves_the_given_blog() {
        let blog = Blog::in_memory();
        let server = BlogServer::new(ServerConfig::default(), blog.clone());
        let body = r#"{"title":"t","author":{"firstName":"A","lastName":"B"}}"#.to_string();
        let response = server.router().oneshot(post_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(blog.count_posts().unwrap(), 1);
    }

    #[tokio::test]
    async fn router_applies_configured_body_limit() {
        let config = ServerConfig {
            max_body_bytes: 32,
            ..Default::default()
        };
        let blog = Blog::in_memory();
        let server = BlogServer::new(config, blog.clone());
        let title = "x".repeat(100);
        let body = format!(r#"{{"title":"{title}","author":{{"firstName":"A","lastName":"B"}}}}"#);
        let response = server.router().oneshot(post_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(blog.count_posts().unwrap(), 0);
    }
}
