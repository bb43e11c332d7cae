//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catalog handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::{CatalogStore, InMemoryCatalog};
use crate::config::CatalogConfig;
use crate::lifecycle::ShutdownSignal;
use crate::http::handlers::{create_disc, delete_disc, get_disc, list_discs};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

/// HTTP server for the catalog service.
pub struct HttpServer {
    router: Router,
    store: Arc<dyn CatalogStore>,
}

impl HttpServer {
    /// Create a server over a freshly seeded in-memory catalog.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryCatalog::seeded()))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: CatalogConfig, store: Arc<dyn CatalogStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = build_router(&config, state);
        Self { router, store }
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            records = self.store.len(),
            "HTTP server starting"
        );
        tracing::info!("🚀 Servidor en http://localhost:{}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &CatalogConfig, state: AppState) -> Router {
    Router::new()
        .route("/ld", get(list_discs).post(create_disc))
        .route("/ld/{id}", get(get_disc).delete(delete_disc))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
}
