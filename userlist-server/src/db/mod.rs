//! Database layer - connection pool and users repository
//!
//! - Connection pool, never `Arc<Mutex<Connection>>`
//! - One statement per operation, no transactions needed
//! - Fail fast at startup, no reconnect loop

pub mod pool;
pub mod users;

pub use pool::{connect, ensure_schema, ping, DbConfig, CONNECT_TIMEOUT, PING_TIMEOUT};
pub use users::PgUserStore;
