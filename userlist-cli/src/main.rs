//! userlist - a users table behind an HTML form, a JSON API and a health
//! probe.
//!
//! Configuration comes from flags, the environment, or a `.env` file in the
//! working directory. The process exits non-zero if the database cannot be
//! reached or the schema cannot be created at startup.

use anyhow::Result;
use clap::Parser;

mod commands;
mod tracing_setup;

use commands::serve::{clear_empty_env, run_serve, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userlist",
    author,
    version,
    about = "Serve a Postgres-backed users list over HTML and JSON"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values feed clap's env fallbacks, so load them first
    dotenvy::dotenv().ok();
    clear_empty_env();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    run_serve(cli.serve).await
}
