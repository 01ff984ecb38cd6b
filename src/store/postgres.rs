//! PostgreSQL implementation of `StudentStore`
//!
//! sqlx is async; each call drives its statement to completion on a
//! current-thread tokio runtime owned by the store, so callers see a
//! blocking API. One connection is opened per call and closed before the
//! call returns. On error paths the connection and any open transaction are
//! dropped, which rolls the transaction back and closes the socket.
//!
//! Connection options are built once when the store is created. The driver
//! also picks up libpq variables such as `PGSSLMODE` at that point; nothing
//! is read from the environment while an operation runs.

use super::{NewStudent, Student, StudentStore};
use crate::config::DbConfig;
use crate::error::StudentError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection as _, PgConnection};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

const SELECT_ALL: &str = "SELECT student_id, first_name, last_name, email, enrollment_date \
     FROM students ORDER BY student_id";

const INSERT: &str = "INSERT INTO students (first_name, last_name, email, enrollment_date) \
     VALUES ($1, $2, $3, $4) RETURNING student_id";

const UPDATE_EMAIL: &str = "UPDATE students SET email = $1 WHERE student_id = $2";

const DELETE: &str = "DELETE FROM students WHERE student_id = $1";

/// Student store backed by a PostgreSQL database
pub struct PgStudentStore {
    config: DbConfig,
    options: PgConnectOptions,
    runtime: Runtime,
}

impl std::fmt::Debug for PgStudentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStudentStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PgStudentStore {
    /// Create a store for the given connection settings
    ///
    /// No connection is opened until the first operation runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot be started
    pub fn new(config: DbConfig) -> Result<Self, StudentError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StudentError::database(format!("Failed to start async runtime: {e}")))?;

        let options = config.connect_options();
        Ok(Self {
            config,
            options,
            runtime,
        })
    }

    /// Driver options every connection of this store is opened with
    #[must_use]
    pub const fn connect_options(&self) -> &PgConnectOptions {
        &self.options
    }

    /// Open a fresh connection; a single attempt, no retries
    async fn connect(&self) -> Result<PgConnection, StudentError> {
        debug!("Connecting to {}", self.config);
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                StudentError::connection(format!("Failed to connect to {}: {e}", self.config))
            })
    }

    /// Close a connection whose work has finished
    async fn release(conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {e}");
        }
    }
}

impl StudentStore for PgStudentStore {
    fn list(&self) -> Result<Vec<Student>, StudentError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            debug!("{SELECT_ALL}");
            let students = sqlx::query_as::<_, Student>(SELECT_ALL)
                .fetch_all(&mut conn)
                .await?;
            Self::release(conn).await;
            Ok(students)
        })
    }

    fn insert(&self, student: &NewStudent) -> Result<i32, StudentError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            let mut tx = conn.begin().await?;
            debug!("{INSERT}");
            let student_id: i32 = sqlx::query_scalar(INSERT)
                .bind(&student.first_name)
                .bind(&student.last_name)
                .bind(&student.email)
                .bind(student.enrollment_date)
                .fetch_one(&mut *tx)
                .await?;
            tx.commit().await?;
            Self::release(conn).await;
            Ok(student_id)
        })
    }

    fn update_email(&self, student_id: i32, email: &str) -> Result<u64, StudentError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            let mut tx = conn.begin().await?;
            debug!("{UPDATE_EMAIL}");
            let affected = sqlx::query(UPDATE_EMAIL)
                .bind(email)
                .bind(student_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            tx.commit().await?;
            Self::release(conn).await;
            Ok(affected)
        })
    }

    fn delete(&self, student_id: i32) -> Result<u64, StudentError> {
        self.runtime.block_on(async {
            let mut conn = self.connect().await?;
            let mut tx = conn.begin().await?;
            debug!("{DELETE}");
            let affected = sqlx::query(DELETE)
                .bind(student_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            tx.commit().await?;
            Self::release(conn).await;
            Ok(affected)
        })
    }
}
