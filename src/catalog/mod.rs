//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! http handlers
//!     → store.rs (CatalogStore trait, InMemoryCatalog)
//!     → types.rs (LaserDisc records, JSON wire format)
//! ```
//!
//! # Design Decisions
//! - The store is an owned object held in the server state, never a global
//! - Ids come from a monotonic counter, never from wall-clock time
//! - Insertion order is the listing order

pub mod store;
pub mod types;

pub use store::{CatalogStore, InMemoryCatalog, StoreError, StoreResult};
pub use types::{seed_records, LaserDisc, NewLaserDisc, RotationType, VideoFormat};
