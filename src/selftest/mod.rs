//! Self-test client.
//!
//! Scripted smoke test that drives a running catalog service over HTTP:
//! list, create, list, delete, list. It talks to the service only through
//! the network, so the same code backs the startup self-test, the
//! `ld-selftest` binary and the integration tests.

pub mod client;
pub mod runner;

use std::net::SocketAddr;

pub use client::CatalogClient;
pub use runner::{run_and_log, run_self_test, sample_disc, SelfTestError, SelfTestReport};

/// URL a local client should use to reach a server bound to `addr`.
///
/// Unspecified bind addresses (`0.0.0.0`, `::`) are reached via loopback.
pub fn loopback_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}
