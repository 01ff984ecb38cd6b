//! Student record storage
//!
//! The `StudentStore` trait is the seam between the record operations and
//! the database. `PgStudentStore` talks to PostgreSQL; `MockStudentStore`
//! keeps an in-memory table for tests.

use crate::error::StudentError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub mod mock;
pub mod postgres;

pub use mock::MockStudentStore;
pub use postgres::PgStudentStore;

/// A row of the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} | {} {} | {} | ",
            self.student_id, self.first_name, self.last_name, self.email
        )?;
        match self.enrollment_date {
            Some(date) => write!(f, "{date}"),
            None => Ok(()),
        }
    }
}

/// Values for a student that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

impl NewStudent {
    /// Attach a storage-assigned id
    #[must_use]
    pub fn into_student(self, student_id: i32) -> Student {
        Student {
            student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            enrollment_date: self.enrollment_date,
        }
    }
}

/// Storage operations on the `students` table
///
/// Every call is independent: implementations acquire a connection, run a
/// single statement, commit mutations and release the connection before
/// returning.
pub trait StudentStore {
    /// All students ordered by ascending id
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or the query fails
    fn list(&self) -> Result<Vec<Student>, StudentError>;

    /// Insert a student and return the generated id
    ///
    /// # Errors
    ///
    /// Returns `StudentError::Constraint` when the database rejects the row
    /// (e.g. duplicate email)
    fn insert(&self, student: &NewStudent) -> Result<i32, StudentError>;

    /// Set the email of a student, returning the number of rows affected
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or rejects the update
    fn update_email(&self, student_id: i32, email: &str) -> Result<u64, StudentError>;

    /// Delete a student, returning the number of rows affected
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or rejects the delete
    fn delete(&self, student_id: i32) -> Result<u64, StudentError>;
}
