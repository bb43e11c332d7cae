use std::path::Path;
use std::time::Duration;
use tokio::net::TcpListener;

use laserdisc_catalog::config::{load_or_default, DEFAULT_CONFIG_FILE};
use laserdisc_catalog::http::HttpServer;
use laserdisc_catalog::lifecycle::{wait_for_ctrl_c, Shutdown};
use laserdisc_catalog::observability::init_logging;
use laserdisc_catalog::selftest::{loopback_url, run_and_log, CatalogClient};

// Handlers run one at a time; concurrency only exists at the I/O layer.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    init_logging(&config.observability);

    tracing::info!("laserdisc-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        self_test = config.self_test.enabled,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    if config.self_test.enabled {
        let base_url = config
            .self_test
            .base_url
            .clone()
            .unwrap_or_else(|| loopback_url(local_addr));
        let delay = Duration::from_millis(config.self_test.startup_delay_ms);
        let mut stop = shutdown.subscribe();

        tokio::spawn(async move {
            tokio::select! {
                _ = run_and_log(CatalogClient::new(&base_url), delay) => {}
                _ = stop.recv() => tracing::debug!("Self-test abandoned on shutdown"),
            }
        });
    }

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_ctrl_c(&signal_shutdown).await;
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
