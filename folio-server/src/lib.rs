//! folio-server: content API for the folio portfolio site
//!
//! Articles, projects, experiences, and education records live as
//! documents in MongoDB; this crate exposes them as CRUD JSON endpoints
//! consumed by the portfolio frontend.

pub mod http;
pub mod models;
pub mod store;

pub use http::{run_server, ServerConfig};
pub use store::Store;
