use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const POSTS: &str = "/posts";
    pub const POST: &str = "/posts/:id";
}

/// Build the axum router with all blog endpoints.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::POSTS,
            get(handler::list_posts).post(handler::create_post),
        )
        .route(
            endpoints::POST,
            axum::routing::put(handler::update_post).delete(handler::delete_post),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
