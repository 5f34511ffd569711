use std::future::Future;
use std::sync::Arc;

use axum::Router;
use common::admin_http::spawn_admin_server;
use configs::AppConfig;
use service::directory::{DirectoryStore, InMemoryDirectory};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::metrics;
use crate::routes;
use crate::state::AppState;

/// Any origin, method and header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Router over the given store with the production CORS and trace layers.
pub fn build_app(store: Arc<dyn DirectoryStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

/// Build the app over a freshly seeded store and serve it until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Some(admin_addr) = cfg.admin.socket_addr()? {
        let _admin = spawn_admin_server(admin_addr, metrics::encode_metrics).await?;
    }

    let store = InMemoryDirectory::seeded();
    let app = build_app(store);

    let addr = cfg.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "directory server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
