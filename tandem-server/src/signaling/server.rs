use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routing::ContentFilter;
use crate::signaling::{MatchmakingService, ws_handler};
use axum::{Router, routing::get};
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// HTTP router with the WebSocket endpoint mounted at `ws_path`.
pub fn app(service: MatchmakingService, ws_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(ws_path, get(ws_handler))
        .layer(cors)
        .with_state(service)
}

/// Binds and serves until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let service = MatchmakingService::new(ContentFilter::new(config.blocked_terms.iter().cloned()));
    let app = app(service, &config.ws_path);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "Matchmaking server listening on ws://{}{}",
        listener.local_addr()?,
        config.ws_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
