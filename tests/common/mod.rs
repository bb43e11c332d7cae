//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use laserdisc_catalog::catalog::{CatalogStore, InMemoryCatalog};
use laserdisc_catalog::config::CatalogConfig;
use laserdisc_catalog::http::HttpServer;
use laserdisc_catalog::lifecycle::Shutdown;

/// A catalog server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a freshly seeded server and wait until it accepts connections.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    start_server_with_store(Arc::new(InMemoryCatalog::seeded())).await
}

/// Start a server over `store` and wait until it accepts connections.
#[allow(dead_code)]
pub async fn start_server_with_store(store: Arc<dyn CatalogStore>) -> TestServer {
    let mut config = CatalogConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.self_test.enabled = false;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::with_store(config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; this only waits for the accept loop.
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    TestServer { addr, shutdown }
}

/// Client that never pools or proxies, so tests stay isolated.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
