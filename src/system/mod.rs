//! System abstraction for environment access
//!
//! This module provides a unified trait for the process environment,
//! allowing configuration to be resolved in tests with mock implementations.

use std::env::VarError;
use std::io;
use std::path::PathBuf;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `dirs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Get the per-user configuration directory, if the platform has one
    fn config_dir(&self) -> Option<PathBuf>;
}
