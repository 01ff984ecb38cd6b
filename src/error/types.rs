//! Custom error types with exit codes

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Main error type for studentdb operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StudentError {
    /// Configuration Error - invalid connection settings
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Constraint Error - the database rejected a write
    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    /// Connection Error - the database is unreachable or refused the credentials
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// Database Error - any other failure reported by the database
    #[error("Database error: {message}")]
    Database { message: String },
}

impl StudentError {
    /// Get the appropriate exit code for this error type
    ///
    /// Exit code 2 is left to clap for usage errors.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Constraint { .. } => 3,
            Self::Connection { .. } => 4,
            Self::Database { .. } => 5,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a constraint error
    #[inline]
    pub fn constraint<S: Into<String>>(message: S) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }

    /// Create a connection error
    #[inline]
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a database error
    #[inline]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Classify a driver error into the matching variant
    ///
    /// Constraint rejections keep the server's message (e.g. the violated
    /// constraint name). Authentication failures (SQLSTATE class 28) and
    /// unknown databases (3D000) count as connection errors.
    #[must_use]
    pub fn from_sqlx(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code();
                let code = code.as_deref().unwrap_or_default();

                match db_err.kind() {
                    ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => Self::constraint(db_err.message()),
                    _ if code.starts_with("28") || code == "3D000" => {
                        Self::connection(db_err.message())
                    }
                    _ => Self::database(db_err.message()),
                }
            }
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::connection(err.to_string()),
            _ => Self::database(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for StudentError {
    #[inline]
    fn from(err: sqlx::Error) -> Self {
        Self::from_sqlx(&err)
    }
}
