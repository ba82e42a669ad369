//! HTTP delivery - `GET /avatar/{name}`
//!
//! The only place errors become status codes. Response bodies never carry
//! error details; those go to the log.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, warn};

use crate::config::ServerConfig;
use crate::pipeline::{AvatarPipeline, PipelineError};

pub const PNG_CONTENT_TYPE: &str = "image/png";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to generate avatar")]
    Generation(#[from] PipelineError),

    #[error("Name too long: at most {0} bytes")]
    NameTooLong(usize),

    #[error("Failed to generate avatar")]
    Worker(#[from] JoinError),
}

impl HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::NameTooLong(_) => StatusCode::URI_TOO_LONG,
            HttpError::Generation(_) | HttpError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            self.to_string(),
        )
            .into_response()
    }
}

pub struct AppState {
    pipeline: AvatarPipeline,
    max_name_bytes: Option<usize>,
}

impl AppState {
    pub fn new(pipeline: AvatarPipeline, config: &ServerConfig) -> Self {
        Self {
            pipeline,
            max_name_bytes: config.max_name_bytes,
        }
    }
}

/// Build the avatar router.
///
/// `{prefix}/avatar/` is routed too, so the empty name is reachable.
pub fn router(pipeline: AvatarPipeline, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(pipeline, config));
    Router::new()
        .route(&config.avatar_route(), get(get_avatar))
        .route(
            &format!("{}/avatar/", config.route_prefix),
            get(get_empty_avatar),
        )
        .with_state(state)
}

async fn get_avatar(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    respond(state, name).await
}

async fn get_empty_avatar(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    respond(state, String::new()).await
}

/// Rendering is CPU-bound, so it runs on the blocking pool.
async fn respond(state: Arc<AppState>, name: String) -> Result<Response, HttpError> {
    let bytes = tokio::task::spawn_blocking(move || serve_avatar(&state, &name))
        .await
        .map_err(|err| {
            error!(error = %err, "avatar worker failed");
            HttpError::from(err)
        })??;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, PNG_CONTENT_TYPE)],
        bytes,
    )
        .into_response())
}

#[tracing::instrument(skip(state, name), fields(name_len = name.len()))]
fn serve_avatar(state: &AppState, name: &str) -> Result<Vec<u8>, HttpError> {
    if let Some(limit) = state.max_name_bytes {
        if name.len() > limit {
            warn!(limit, "rejecting oversized name");
            return Err(HttpError::NameTooLong(limit));
        }
    }

    state.pipeline.generate_avatar(name).map_err(|err| {
        error!(error = %err, "avatar generation failed");
        HttpError::from(err)
    })
}
