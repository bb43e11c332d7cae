//! Laserdisc catalog service library.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │             LASERDISC CATALOG            │
//!   HTTP request       │  ┌─────────┐    ┌──────────┐             │
//!   ───────────────────┼─▶│  http   │───▶│ handlers │             │
//!                      │  │ server  │    └────┬─────┘             │
//!                      │  └─────────┘         │                   │
//!                      │                      ▼                   │
//!   JSON response      │  ┌─────────┐    ┌──────────┐             │
//!   ◀──────────────────┼──│response │◀───│ catalog  │             │
//!                      │  └─────────┘    │  store   │             │
//!                      │                 └──────────┘             │
//!                      │  ┌────────────────────────────────────┐  │
//!                      │  │ config · lifecycle · observability │  │
//!                      │  └────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────┘
//!                                       ▲
//!                                       │ loopback HTTP
//!                               ┌───────┴───────┐
//!                               │   selftest    │
//!                               └───────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod selftest;

pub use catalog::{CatalogStore, InMemoryCatalog, LaserDisc, NewLaserDisc};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
