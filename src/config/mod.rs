//! Configuration management module
//!
//! Resolves PostgreSQL connection settings from the environment and loads
//! optional `.env` files

pub mod dotenv;

use crate::error::StudentError;
use crate::system::System;
use sqlx::postgres::PgConnectOptions;
use std::env::VarError;
use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "postgres";
pub const DEFAULT_USER: &str = "postgres";

/// Connection settings for the student database
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Resolve settings from `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER` and
    /// `PGPASSWORD`, falling back to the defaults for unset or empty values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PGPORT` is not a valid port number
    /// - A variable is set but is not valid unicode
    pub fn from_system(system: &dyn System) -> Result<Self, StudentError> {
        let port = match env_value(system, "PGPORT")? {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                StudentError::configuration(format!("Invalid PGPORT '{raw}': {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: env_value(system, "PGHOST")?.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            database: env_value(system, "PGDATABASE")?
                .unwrap_or_else(|| DEFAULT_DATABASE.to_owned()),
            user: env_value(system, "PGUSER")?.unwrap_or_else(|| DEFAULT_USER.to_owned()),
            password: env_value(system, "PGPASSWORD")?.unwrap_or_default(),
        })
    }

    /// Build driver connection options from these settings
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .application_name("studentdb");

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_owned(),
            user: DEFAULT_USER.to_owned(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .finish()
    }
}

impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

/// Read a variable, treating empty values as unset
fn env_value(system: &dyn System, key: &str) -> Result<Option<String>, StudentError> {
    match system.env_var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(StudentError::configuration(format!(
            "Environment variable {key} is not valid unicode"
        ))),
    }
}
