//! `.env` file discovery and loading
//!
//! Files are checked in priority order:
//! 1. `./.env` in the current directory
//! 2. `<config dir>/studentdb/.env`
//!
//! Variables already present in the process environment are never overwritten.

use crate::system::System;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-user configuration directory
pub const APP_DIR: &str = "studentdb";

/// List the `.env` files that should be consulted, highest priority first
#[must_use]
pub fn env_file_candidates(system: &dyn System) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = system.current_dir() {
        candidates.push(cwd.join(".env"));
    }

    if let Some(config_dir) = system.config_dir() {
        candidates.push(config_dir.join(APP_DIR).join(".env"));
    }

    candidates
}

/// Load every existing candidate file into the process environment
///
/// Returns the files that were loaded. Unreadable or malformed files are
/// skipped with a debug message.
pub fn load_dotenv(system: &dyn System) -> Vec<PathBuf> {
    env_file_candidates(system)
        .into_iter()
        .filter(|path| load_env_file(path))
        .collect()
}

/// Load a single `.env` file, returning whether it was applied
pub fn load_env_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) => {
            debug!("Failed to load {}: {}", path.display(), e);
            false
        }
    }
}
