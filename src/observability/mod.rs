//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, server, self-test client
//!     → tracing events with structured fields (request_id, id, film)
//!     → logging.rs (EnvFilter + fmt subscriber)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
