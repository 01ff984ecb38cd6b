use crate::store::NewStudent;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for studentdb
#[derive(Parser, Debug, Clone)]
#[command(name = "studentdb")]
#[command(about = "A CLI tool for managing student records in a PostgreSQL database")]
#[command(
    long_about = "A CLI tool for managing student records in a PostgreSQL database.\n\n\
    Connection settings are read from PGHOST, PGPORT, PGDATABASE, PGUSER and PGPASSWORD \
    (also from a .env file), defaulting to postgres@localhost:5432/postgres."
)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for student listings
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true
    )]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all students
    #[command(name = "get_all")]
    GetAll,

    /// Add a student
    #[command(name = "add")]
    Add(AddArgs),

    /// Update student email by id
    #[command(name = "update_email")]
    UpdateEmail(UpdateEmailArgs),

    /// Delete student by id
    #[command(name = "delete")]
    Delete(DeleteArgs),
}

impl Command {
    /// Whether the command changes the table (and is followed by a listing)
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(*self, Self::GetAll)
    }
}

/// Arguments for `add`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// First name
    #[arg(long, value_name = "NAME", value_parser = non_empty)]
    pub first: String,

    /// Last name
    #[arg(long, value_name = "NAME", value_parser = non_empty)]
    pub last: String,

    /// Email (unique)
    #[arg(long, value_name = "EMAIL", value_parser = non_empty)]
    pub email: String,

    /// Enrollment date YYYY-MM-DD (optional)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl From<AddArgs> for NewStudent {
    fn from(args: AddArgs) -> Self {
        Self {
            first_name: args.first,
            last_name: args.last,
            email: args.email,
            enrollment_date: args.date,
        }
    }
}

/// Arguments for `update_email`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmailArgs {
    /// Student id
    #[arg(long, value_name = "ID")]
    pub id: i32,

    /// New email
    #[arg(long, value_name = "EMAIL", value_parser = non_empty)]
    pub email: String,
}

/// Arguments for `delete`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    /// Student id
    #[arg(long, value_name = "ID")]
    pub id: i32,
}

/// How student listings are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One aligned line per student
    #[default]
    Text,
    /// A JSON array of student objects
    Json,
}

/// Reject empty or whitespace-only values
fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("value cannot be empty".to_owned());
    }
    Ok(value.to_owned())
}

/// Parse a `YYYY-MM-DD` date
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}
