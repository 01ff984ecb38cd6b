//! `studentdb` - A CLI tool for managing student records in PostgreSQL
//!
//! This library lists, inserts, updates and deletes rows of a `students`
//! table. Each invocation runs one operation over its own connection;
//! mutations are followed by a fresh listing of the table.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod store;
pub mod system;

use anyhow::Result;
use cli::Args;
use config::DbConfig;
use config::dotenv::load_dotenv;
use std::io;
use store::PgStudentStore;
use system::{RealSystem, System};
use tracing::debug;

/// Main entry point for the studentdb library
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the operation fails
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem::new();
    let store = build_store(&system)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute(args, &store, &mut out)
}

/// Resolve configuration (after loading `.env` files) and build the store
///
/// No connection is opened here; each store operation opens its own.
///
/// # Errors
///
/// Returns an error if the environment holds invalid connection settings
pub fn build_store(system: &dyn System) -> Result<PgStudentStore> {
    for path in load_dotenv(system) {
        debug!("Using environment file {}", path.display());
    }

    let config = DbConfig::from_system(system)?;
    debug!("Resolved database config: {config:?}");
    Ok(PgStudentStore::new(config)?)
}
