//! HTTP endpoints for the editor: load, save, reset backup and rendering

use crate::application::render::{Output, RenderService};
use crate::domain::Content;
use crate::error::PurpleLineError;
use crate::infrastructure::access::AccessPolicy;
use crate::infrastructure::{ContentRepository, FileSystemRepository};
use axum::extract::{ConnectInfo, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn, Span};

pub const UNAUTHORIZED_MESSAGE: &str = "This IP is not authorized. Try the VPN?";

/// Body of every save and reset response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl SaveResponse {
    pub fn ok() -> Self {
        SaveResponse {
            success: true,
            message: None,
            ip: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SaveResponse {
            success: false,
            message: Some(message.into()),
            ip: None,
        }
    }

    pub fn unauthorized(ip: impl Into<String>) -> Self {
        SaveResponse {
            success: false,
            message: Some(UNAUTHORIZED_MESSAGE.to_string()),
            ip: Some(ip.into()),
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    inner: Arc<HttpStateInner>,
}

struct HttpStateInner {
    repository: FileSystemRepository,
    renderer: RenderService,
    policy: AccessPolicy,
}

impl HttpState {
    pub fn new(repository: FileSystemRepository, renderer: RenderService, policy: AccessPolicy) -> Self {
        HttpState {
            inner: Arc::new(HttpStateInner {
                repository,
                renderer,
                policy,
            }),
        }
    }

    fn authorize(&self, caller: SocketAddr) -> Result<(), Response> {
        if self.inner.policy.is_authorized(caller.ip()) {
            Ok(())
        } else {
            warn!(ip = %caller.ip(), "rejected request from unauthorized address");
            Err(respond(
                StatusCode::FORBIDDEN,
                SaveResponse::unauthorized(caller.ip().to_string()),
            ))
        }
    }
}

/// Run a repository call on the blocking pool, inside the caller's span
async fn with_repository<F, R>(state: &HttpState, f: F) -> Result<R, PurpleLineError>
where
    F: FnOnce(&FileSystemRepository) -> Result<R, PurpleLineError> + Send + 'static,
    R: Send + 'static,
{
    let inner = Arc::clone(&state.inner);
    let span = Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(|| f(&inner.repository)))
        .await
        .map_err(|e| PurpleLineError::Server(format!("Repository task failed: {}", e)))?
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/purpleline.json", get(load_content))
        .route("/save", post(save_content))
        .route("/reset", post(backup_content))
        .route("/render/{target}", get(render))
        .with_state(state)
}

async fn load_content(State(state): State<HttpState>) -> Response {
    match with_repository(&state, |repo| repo.load_content()).await {
        Ok(content) => Json(content).into_response(),
        Err(err) => server_error(err),
    }
}

async fn save_content(
    State(state): State<HttpState>,
    ConnectInfo(caller): ConnectInfo<SocketAddr>,
    body: String,
) -> Response {
    if let Err(rejection) = state.authorize(caller) {
        return rejection;
    }

    let content = match Content::from_json(&body) {
        Ok(content) => content,
        Err(err) => return respond(StatusCode::BAD_REQUEST, SaveResponse::failed(err.to_string())),
    };

    match with_repository(&state, move |repo| repo.save_content(&content)).await {
        Ok(()) => {
            info!(ip = %caller.ip(), "content saved over http");
            respond(StatusCode::OK, SaveResponse::ok())
        }
        Err(err) => server_error(err),
    }
}

/// Keeps the posted document as the single reset backup
async fn backup_content(
    State(state): State<HttpState>,
    ConnectInfo(caller): ConnectInfo<SocketAddr>,
    body: String,
) -> Response {
    if let Err(rejection) = state.authorize(caller) {
        return rejection;
    }

    let content = match Content::from_json(&body) {
        Ok(content) => content,
        Err(err) => return respond(StatusCode::BAD_REQUEST, SaveResponse::failed(err.to_string())),
    };

    match with_repository(&state, move |repo| repo.save_backup(&content)).await {
        Ok(()) => respond(StatusCode::OK, SaveResponse::ok()),
        Err(err) => server_error(err),
    }
}

async fn render(State(state): State<HttpState>, Path(target): Path<String>) -> Response {
    let output = match target.parse::<Output>() {
        Ok(output) => output,
        Err(err) => return respond(StatusCode::NOT_FOUND, SaveResponse::failed(err.to_string())),
    };

    let rendered = with_repository(&state, |repo| repo.load_content())
        .await
        .and_then(|content| state.inner.renderer.render(&content, output, false));

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => server_error(err),
    }
}

fn respond(status: StatusCode, body: SaveResponse) -> Response {
    (status, Json(body)).into_response()
}

fn server_error(err: PurpleLineError) -> Response {
    error!(error = %err, "request failed");
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        SaveResponse::failed(err.to_string()),
    )
}
