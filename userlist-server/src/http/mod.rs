//! HTTP server layer
//!
//! Axum server with:
//! - One router per resource, merged in `server`
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod render;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use render::render_home;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
