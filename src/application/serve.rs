//! Serve use case: run the editor's HTTP endpoints

use crate::application::render::RenderService;
use crate::error::{PurpleLineError, Result};
use crate::infrastructure::access::AccessPolicy;
use crate::infrastructure::http::{build_router, HttpState};
use crate::infrastructure::{ContentRepository, FileSystemRepository};
use std::net::SocketAddr;
use tracing::info;

/// Listen on `address` (or the configured server.address) until the process is stopped
pub async fn serve(repository: FileSystemRepository, address: Option<String>) -> Result<()> {
    let config = repository.load_config()?;
    let policy = AccessPolicy::from_ranges(&config.access.allowed_ranges)?;

    let address = address.unwrap_or_else(|| config.server.address.clone());
    let address: SocketAddr = address.parse().map_err(|e| {
        PurpleLineError::Config(format!("Invalid server address '{}': {}", address, e))
    })?;

    let state = HttpState::new(repository, RenderService::new(config), policy);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| PurpleLineError::Server(format!("failed to bind {}: {}", address, e)))?;
    info!(%address, "listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| PurpleLineError::Server(e.to_string()))
}
