//! # HTTP Server
//!
//! Binds the listener, serves the item API and closes the store on
//! interrupt.

use std::future::{Future, IntoFuture};
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::store::ItemStore;

use super::config::ServerConfig;
use super::health_routes::health_routes;
use super::item_routes::item_routes;

/// Build the combined router with all endpoints
pub fn build_router(store: ItemStore) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api", item_routes(store))
        .layer(TraceLayer::new_for_http())
}

/// HTTP server owning the item store
pub struct HttpServer {
    config: ServerConfig,
    store: ItemStore,
}

impl HttpServer {
    pub fn new(config: ServerConfig, store: ItemStore) -> Self {
        Self { config, store }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(&self) -> Router {
        build_router(self.store.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "stockroom listening");

        self.run_until(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for interrupt");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serve on `listener` until `shutdown` resolves, then close the store.
    ///
    /// In-flight requests are not drained: the serve loop is dropped as soon
    /// as the shutdown future completes.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()>,
    {
        let router = self.router();

        let served = tokio::select! {
            result = axum::serve(listener, router).into_future() => result,
            _ = shutdown => {
                info!("shutdown requested");
                Ok(())
            }
        };

        self.store.close().await;
        served
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_server(config: ServerConfig) -> HttpServer {
        let store = ItemStore::connect("sqlite::memory:").await.unwrap();
        HttpServer::new(config, store)
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let server = test_server(ServerConfig::with_port(8080)).await;
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_shutdown_closes_store() {
        let server = test_server(ServerConfig::default()).await;
        let store = server.store.clone();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        server.run_until(listener, async {}).await.unwrap();

        assert!(store.is_closed());
    }
}
