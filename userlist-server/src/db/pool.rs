//! Database connection pool management
//!
//! Connect fails fast: the first connection must come up within
//! [`CONNECT_TIMEOUT`] or startup aborts. Later acquires use the pool's
//! default timeout and are bounded by request cancellation.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};

use crate::error::DbError;

/// Maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long startup waits for the first connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(100);

/// How long a health probe waits for the database.
pub const PING_TIMEOUT: Duration = Duration::from_millis(10);

pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "postgres";

const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT NOT NULL)";

/// Connection parameters for the users database
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DbConfig {
    /// Driver options for this config. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

// Password never appears in logs.
impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "postgres://{}@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

/// Create a PostgreSQL connection pool and verify it can hand out a
/// connection within [`CONNECT_TIMEOUT`].
///
/// # Errors
///
/// Returns [`DbError::Connection`] if the server refuses or the credentials
/// are rejected, [`DbError::ConnectTimeout`] if nothing answers in time.
/// Neither is retried.
///
/// # Example
///
/// ```ignore
/// let pool = connect(&DbConfig::default()).await?;
/// ensure_schema(&pool).await?;
/// ```
pub async fn connect(config: &DbConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(config.connect_options());

    match tokio::time::timeout(CONNECT_TIMEOUT, pool.acquire()).await {
        Ok(Ok(_conn)) => {
            tracing::info!(host = %config.host, port = config.port, "connected to database");
            Ok(pool)
        }
        Ok(Err(source)) => Err(DbError::Connection {
            host: config.host.clone(),
            port: config.port,
            source,
        }),
        Err(_) => Err(DbError::ConnectTimeout {
            host: config.host.clone(),
            port: config.port,
            timeout: CONNECT_TIMEOUT,
        }),
    }
}

/// Create the `users` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(DbError::Schema)?;

    tracing::debug!("users table ready");
    Ok(())
}

/// Acquire a connection and ping it, giving up after `timeout`.
pub async fn ping(pool: &PgPool, timeout: Duration) -> Result<(), DbError> {
    let probe = async {
        let mut conn = pool.acquire().await?;
        conn.ping().await
    };

    match tokio::time::timeout(timeout, probe).await {
        Ok(result) => result.map_err(DbError::Unavailable),
        Err(_) => Err(DbError::PingTimeout(timeout)),
    }
}
