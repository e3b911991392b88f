//! Error types for userlist-server

use std::time::Duration;

use thiserror::Error;

/// Storage failures, split by the operation that produced them.
///
/// `Connection`, `ConnectTimeout` and `Schema` only happen at startup and are
/// fatal. The rest are request-scoped.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("failed to connect to database at {host}:{port}: {source}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    #[error("timed out after {timeout:?} connecting to database at {host}:{port}")]
    ConnectTimeout {
        host: String,
        port: u16,
        timeout: Duration,
    },

    #[error("failed to create users table: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to load users: {0}")]
    Query(#[source] sqlx::Error),

    #[error("failed to add user: {0}")]
    Insert(#[source] sqlx::Error),

    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database did not answer ping within {0:?}")]
    PingTimeout(Duration),
}
