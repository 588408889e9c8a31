//! HTTP server for the harvest API.
//!
//! Provides endpoints for:
//! - `GET /coll` - The whole collection
//! - `GET /unit/:unit` - Records for one unit

use axum::{extract::Extension, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{collection::collection_handler, unit::unit_handler};
use crate::state::AppState;

/// Build the router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/coll", get(collection_handler))
        .route("/unit/:unit", get(unit_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
pub async fn start_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting harvest API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
