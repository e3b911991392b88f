//! userlist-server: a users table behind an HTML form, a JSON API and a
//! health probe.
//!
//! The binary in `userlist-cli` connects to Postgres, ensures the schema,
//! and hands a [`PgUserStore`](db::PgUserStore) to [`run_server`].

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod store;

pub use error::DbError;
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use store::{MemoryUserStore, UserStore};
