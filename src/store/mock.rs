//! In-memory student store for testing

#![expect(clippy::module_name_repetitions)]

use super::{NewStudent, Student, StudentStore};
use crate::error::StudentError;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory implementation of `StudentStore`
///
/// Mirrors the storage semantics the CLI relies on: ids are generated in
/// increasing order and never reused, and emails are unique. Failed writes
/// leave the table untouched.
///
/// # Example
/// ```
/// use studentdb::store::{MockStudentStore, NewStudent, StudentStore};
///
/// let store = MockStudentStore::new();
/// let id = store
///     .insert(&NewStudent {
///         first_name: "Ana".to_owned(),
///         last_name: "Lopez".to_owned(),
///         email: "ana.lopez@example.com".to_owned(),
///         enrollment_date: None,
///     })
///     .unwrap();
///
/// assert_eq!(id, 1);
/// assert_eq!(store.list().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockStudentStore {
    state: Arc<RwLock<MockStoreState>>,
}

struct MockStoreState {
    rows: BTreeMap<i32, Student>,
    next_id: i32,
    unreachable: bool,
    connections: usize,
}

impl MockStudentStore {
    /// Create an empty store
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockStoreState {
                rows: BTreeMap::new(),
                next_id: 1,
                unreachable: false,
                connections: 0,
            })),
        }
    }

    /// Seed a student (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the row violates the email uniqueness constraint
    #[inline]
    pub fn with_student(self, student: NewStudent) -> Result<Self, StudentError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| StudentError::database(e.to_string()))?;
        state.insert_row(&student)?;
        drop(state);
        Ok(self)
    }

    /// Make every operation fail as if the database were down (builder pattern)
    #[must_use]
    #[inline]
    pub fn unreachable(self) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.unreachable = true;
        }
        self
    }

    /// Number of connection attempts made by store operations
    #[must_use]
    #[inline]
    pub fn connection_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.connections)
    }

    /// Acquire the state as an operation would acquire a connection
    fn connect(&self) -> Result<std::sync::RwLockWriteGuard<'_, MockStoreState>, StudentError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| StudentError::database(e.to_string()))?;
        state.connections += 1;
        if state.unreachable {
            return Err(StudentError::connection(
                "Failed to connect to mock database: connection refused",
            ));
        }
        Ok(state)
    }
}

impl MockStoreState {
    fn insert_row(&mut self, student: &NewStudent) -> Result<i32, StudentError> {
        if self.rows.values().any(|row| row.email == student.email) {
            return Err(StudentError::constraint(format!(
                "duplicate key value violates unique constraint \"students_email_key\": \
                 Key (email)=({}) already exists.",
                student.email
            )));
        }

        let student_id = self.next_id;
        self.next_id += 1;
        self.rows
            .insert(student_id, student.clone().into_student(student_id));
        Ok(student_id)
    }
}

impl Default for MockStudentStore {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for MockStudentStore {
    fn list(&self) -> Result<Vec<Student>, StudentError> {
        let state = self.connect()?;
        Ok(state.rows.values().cloned().collect())
    }

    fn insert(&self, student: &NewStudent) -> Result<i32, StudentError> {
        let mut state = self.connect()?;
        state.insert_row(student)
    }

    fn update_email(&self, student_id: i32, email: &str) -> Result<u64, StudentError> {
        let mut state = self.connect()?;

        // No matching row means nothing is written, so no constraint can fire
        if !state.rows.contains_key(&student_id) {
            return Ok(0);
        }

        if state
            .rows
            .values()
            .any(|row| row.email == email && row.student_id != student_id)
        {
            return Err(StudentError::constraint(format!(
                "duplicate key value violates unique constraint \"students_email_key\": \
                 Key (email)=({email}) already exists."
            )));
        }

        match state.rows.get_mut(&student_id) {
            Some(row) => {
                email.clone_into(&mut row.email);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, student_id: i32) -> Result<u64, StudentError> {
        let mut state = self.connect()?;
        Ok(u64::from(state.rows.remove(&student_id).is_some()))
    }
}
