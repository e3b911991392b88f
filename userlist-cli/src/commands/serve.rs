//! Serve the userlist HTML form, JSON API and health probe
//!
//! Every option can come from a flag or its environment variable; flags win.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use userlist_server::db::pool::{DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER};
use userlist_server::db::{connect, ensure_schema, DbConfig, PgUserStore};
use userlist_server::http::server::DEFAULT_PORT;
use userlist_server::{run_server, AppState, ServerConfig};

/// Environment variables read by [`ServeArgs`]
pub const ENV_VARS: [&str; 6] = ["APP_PORT", "DB_USER", "DB_PASSWORD", "DB_HOST", "DB_PORT", "DB_NAME"];

/// Unset any of [`ENV_VARS`] that are present but empty, so their defaults
/// apply. Must run before parsing.
pub fn clear_empty_env() {
    for var in ENV_VARS {
        if std::env::var_os(var).is_some_and(|value| value.is_empty()) {
            std::env::remove_var(var);
        }
    }
}

/// Arguments for serving
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (all interfaces)
    #[arg(long, short = 'p', env = "APP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = DEFAULT_DB_USER)]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub db_password: String,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = DEFAULT_DB_HOST)]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,
}

impl ServeArgs {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            name: self.db_name.clone(),
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::with_port(self.port)
    }
}

/// Connect, ensure the schema, then serve until shutdown.
///
/// Startup failures are returned so the process exits non-zero.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::info!(database = %db_config, "Starting userlist on port {}", args.port);

    let pool = connect(&db_config)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create users table")?;

    let state = AppState::new(Arc::new(PgUserStore::new(pool.clone())));

    // Run server (blocks until shutdown)
    let served = run_server(state, args.server_config())
        .await
        .context("Server error");

    pool.close().await;
    served
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_build_configs() {
        let cli = TestCli::try_parse_from([
            "userlist",
            "--port",
            "9090",
            "--db-user",
            "app",
            "--db-password",
            "secret",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-name",
            "users",
        ])
        .unwrap();

        let db = cli.serve.db_config();
        assert_eq!(db.user, "app");
        assert_eq!(db.password, "secret");
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 6543);
        assert_eq!(db.name, "users");
        assert_eq!(cli.serve.server_config().bind_addr.port(), 9090);
    }

    #[test]
    fn empty_env_values_fall_back_to_defaults() {
        for var in ENV_VARS {
            std::env::set_var(var, "");
        }
        clear_empty_env();

        let cli = TestCli::try_parse_from(["userlist"]).unwrap();
        assert_eq!(cli.serve.db_config(), DbConfig::default());
        assert_eq!(cli.serve.server_config().bind_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(TestCli::try_parse_from(["userlist", "--port", "http"]).is_err());
    }
}
