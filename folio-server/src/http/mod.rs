//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown, then explicit store teardown
//! - One `{data, error}` envelope for every API response

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use envelope::{Ack, Envelope};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
