//! Admin HTTP listener
//!
//! Serves `/healthz` and `/metrics` on a separate address so scrapers never
//! share a port with public traffic. Metrics are rendered by the caller.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub type MetricsFn = fn() -> (StatusCode, String);

async fn healthz() -> &'static str {
    "OK"
}

/// Router exposing `/healthz` and `/metrics`.
pub fn admin_router(metrics_fn: MetricsFn) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || async move { metrics_fn() }))
}

/// Bind the admin listener and serve it on the current runtime.
///
/// Binding happens before this returns so address errors reach the caller;
/// serve errors afterwards are only logged.
pub async fn spawn_admin_server(
    addr: SocketAddr,
    metrics_fn: MetricsFn,
) -> anyhow::Result<JoinHandle<()>> {
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    info!(addr = %bound, "admin server listening");
    let router = admin_router(metrics_fn);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!(error = %e, "admin server stopped");
        }
    }))
}
