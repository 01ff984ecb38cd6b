//! CLI command dispatch

use crate::cli::{Args, Command};
use crate::operations::{self, Outcome};
use crate::store::{NewStudent, StudentStore};
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Execute the parsed command against a store
///
/// Mutating commands re-fetch and print the full listing afterwards, even
/// when no row matched.
///
/// # Errors
///
/// Returns an error if any store call fails or output cannot be written
pub fn execute(args: &Args, store: &dyn StudentStore, out: &mut dyn Write) -> Result<()> {
    match args.command {
        Command::GetAll => {
            operations::get_all(store, args.output_format, out)?;
        }
        Command::Add(ref add) => {
            let student = NewStudent::from(add.clone());
            let student_id = operations::add(store, &student, out)?;
            info!("Inserted student {student_id}");
        }
        Command::UpdateEmail(ref update) => {
            let outcome = operations::update_email(store, update.id, &update.email, out)?;
            log_outcome("update_email", update.id, outcome);
        }
        Command::Delete(ref delete) => {
            let outcome = operations::delete(store, delete.id, out)?;
            log_outcome("delete", delete.id, outcome);
        }
    }

    if args.command.is_mutation() {
        operations::get_all(store, args.output_format, out)?;
    }
    Ok(())
}

fn log_outcome(command: &str, student_id: i32, outcome: Outcome) {
    match outcome {
        Outcome::Applied => info!("{command}: student {student_id} changed"),
        Outcome::NotFound => info!("{command}: student {student_id} not found"),
    }
}
