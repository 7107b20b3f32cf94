//! Post handlers.
//!
//! ```text
//! GET    /posts      -> 200 [PostView]
//! POST   /posts      -> 201 PostView
//! PUT    /posts/:id  -> 204
//! DELETE /posts/:id  -> 204
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use blog_sdk::{NewPost, PostId, PostPatch, PostView, ResolvedPost, SdkResult};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

fn parse_post_id(raw: &str) -> ServerResult<PostId> {
    raw.parse()
        .map_err(|e: blog_types::TypeError| ServerError::InvalidRequest(e.to_string()))
}

/// Unwrap a JSON body. Length-limit rejections keep their 413; every other
/// rejection is a 400.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(rejection.body_text())
        } else {
            ServerError::InvalidRequest(rejection.body_text())
        }
    })
}

/// List every post with its author resolved.
pub async fn list_posts(State(state): State<AppState>) -> ServerResult<Json<Vec<PostView>>> {
    let posts = state.blog.fetch_all_and_resolve()?;
    let views = posts
        .iter()
        .map(ResolvedPost::view)
        .collect::<SdkResult<Vec<_>>>()?;
    debug!(count = views.len(), "listed posts");
    Ok(Json(views))
}

/// Create a post together with a fresh author.
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<NewPost>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<PostView>)> {
    let request = json_body(body)?;
    let created = state.blog.create_post(request)?;
    Ok((StatusCode::CREATED, Json(created.view()?)))
}

/// Partially update a post. Responds with no body.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PostPatch>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let id = parse_post_id(&id)?;
    let patch = json_body(body)?;
    state.blog.update_post(&id, patch)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a post. Deleting a post that does not exist still succeeds.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = parse_post_id(&id)?;
    state.blog.delete_post(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
