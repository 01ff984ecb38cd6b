//! Record operations on the `students` table
//!
//! Each operation runs exactly one statement through the store and prints
//! its outcome. Zero affected rows on update/delete is a reported outcome,
//! not an error.

use crate::cli::OutputFormat;
use crate::operations::render::write_students;
use crate::store::{NewStudent, Student, StudentStore};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Result of an update or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A matching row was changed
    Applied,
    /// No row had the requested id
    NotFound,
}

impl Outcome {
    /// Interpret a row-affected count
    #[must_use]
    pub const fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 { Self::NotFound } else { Self::Applied }
    }
}

/// Retrieve and print all students
///
/// # Errors
///
/// Returns an error if the store fails or the output cannot be written
pub fn get_all(
    store: &dyn StudentStore,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<Vec<Student>> {
    let students = store.list()?;
    debug!("Fetched {} student(s)", students.len());
    write_students(out, &students, format)?;
    Ok(students)
}

/// Insert a new student and print the generated id
///
/// # Errors
///
/// Returns an error if the store rejects the row (e.g. duplicate email)
pub fn add(store: &dyn StudentStore, student: &NewStudent, out: &mut dyn Write) -> Result<i32> {
    let student_id = store.insert(student)?;
    writeln!(
        out,
        "Inserted student_id={student_id} for {} {}",
        student.first_name, student.last_name
    )?;
    Ok(student_id)
}

/// Update the email of a student
///
/// # Errors
///
/// Returns an error if the store fails; a missing id is `Outcome::NotFound`
pub fn update_email(
    store: &dyn StudentStore,
    student_id: i32,
    email: &str,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let outcome = Outcome::from_rows_affected(store.update_email(student_id, email)?);
    match outcome {
        Outcome::NotFound => writeln!(out, "No student found with id={student_id}")?,
        Outcome::Applied => {
            writeln!(out, "Updated email for student_id={student_id} -> {email}")?;
        }
    }
    Ok(outcome)
}

/// Delete a student by id
///
/// # Errors
///
/// Returns an error if the store fails; a missing id is `Outcome::NotFound`
pub fn delete(store: &dyn StudentStore, student_id: i32, out: &mut dyn Write) -> Result<Outcome> {
    let outcome = Outcome::from_rows_affected(store.delete(student_id)?);
    match outcome {
        Outcome::NotFound => writeln!(out, "No student found with id={student_id}")?,
        Outcome::Applied => writeln!(out, "Deleted student_id={student_id}")?,
    }
    Ok(outcome)
}
