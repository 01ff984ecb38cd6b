//! Rendering of student listings

use crate::cli::OutputFormat;
use crate::store::Student;
use anyhow::{Context as _, Result};
use std::io::Write;

/// Notice printed for an empty table in text mode
pub const EMPTY_NOTICE: &str = "No students found.";

/// Write a listing in the requested format
///
/// # Errors
///
/// Returns an error if the output cannot be written
pub fn write_students(out: &mut dyn Write, students: &[Student], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if students.is_empty() {
                writeln!(out, "{EMPTY_NOTICE}")?;
            }
            for student in students {
                writeln!(out, "{student}")?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(students)
                .context("Failed to serialize students to JSON")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn render(students: &[Student], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_students(&mut out, students, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Vec<Student> {
        vec![
            Student {
                student_id: 1,
                first_name: "John".to_owned(),
                last_name: "Doe".to_owned(),
                email: "john.doe@example.com".to_owned(),
                enrollment_date: NaiveDate::from_ymd_opt(2023, 9, 1),
            },
            Student {
                student_id: 2,
                first_name: "Jane".to_owned(),
                last_name: "Smith".to_owned(),
                email: "jane.smith@example.com".to_owned(),
                enrollment_date: None,
            },
        ]
    }

    #[test]
    fn text_listing_has_one_line_per_student() {
        assert_eq!(
            render(&sample(), OutputFormat::Text),
            "  1 | John Doe | john.doe@example.com | 2023-09-01\n\
             \x20 2 | Jane Smith | jane.smith@example.com | \n"
        );
    }

    #[test]
    fn empty_text_listing_prints_notice() {
        assert_eq!(render(&[], OutputFormat::Text), "No students found.\n");
    }

    #[test]
    fn json_listing_round_trips_fields() {
        let value: serde_json::Value =
            serde_json::from_str(&render(&sample(), OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["student_id"], 1);
        assert_eq!(value[0]["enrollment_date"], "2023-09-01");
        assert_eq!(value[1]["email"], "jane.smith@example.com");
        assert!(value[1]["enrollment_date"].is_null());
    }

    #[test]
    fn empty_json_listing_is_an_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json).trim(), "[]");
    }
}
