//! Command-line interface module
//!
//! Handles argument parsing and dispatch to the record operations

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
