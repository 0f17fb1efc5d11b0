use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::docs;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router(state))
        .merge(docs::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(state: AppState, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Address book API running at http://{}", addr);
    tracing::info!("Interactive docs at http://{}/docs", addr);
    axum::serve(listener, app(state))
        .await
        .context("Server error")?;
    Ok(())
}
