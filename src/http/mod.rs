//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (route → catalog store call)
//!     → response.rs (JSON bodies, error → status mapping)
//!     → Send to client
//! ```
//!
//! # Routes
//! | Method | Path       | Success | Failure  |
//! |--------|------------|---------|----------|
//! | GET    | `/ld`      | 200     |          |
//! | GET    | `/ld/{id}` | 200     | 404      |
//! | POST   | `/ld`      | 201     | 500      |
//! | DELETE | `/ld/{id}` | 200     | 404, 500 |

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, MessageBody};
pub use server::{build_router, AppState, HttpServer};
