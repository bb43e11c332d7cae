//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! catalog.toml (optional, working directory)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CatalogConfig (validated, immutable)
//!     → handed to HttpServer and the self-test runner
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; a missing file means "use defaults"
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError, DEFAULT_CONFIG_FILE};
pub use schema::{
    CatalogConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, SelfTestConfig,
    TimeoutConfig,
};
