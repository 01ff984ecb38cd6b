//! # `studentdb`
//!
//! `studentdb` is a command-line tool for basic CRUD on a PostgreSQL
//! `students` table.
//!
//! ## Usage
//!
//! ```sh
//! studentdb get_all
//! studentdb add --first "Ana" --last "Lopez" --email "ana.lopez@example.com" --date 2024-09-01
//! studentdb update_email --id 1 --email "johnny.doe@example.com"
//! studentdb delete --id 3
//! ```
//!
//! Connection settings come from `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`
//! and `PGPASSWORD`, optionally loaded from a `.env` file.

use anyhow::Result;
use clap::Parser as _;
use studentdb::cli::Args;
use studentdb::error::StudentError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep stderr quiet unless asked; results go to stdout
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match studentdb::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<StudentError>()
                    .map_or(1, StudentError::exit_code),
            );
        }
    }
}
