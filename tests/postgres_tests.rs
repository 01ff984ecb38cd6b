//! Round-trip tests against a real PostgreSQL database
//!
//! Run with: PGHOST=... PGDATABASE=... cargo test --test postgres_tests -- --ignored

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use chrono::NaiveDate;
use sqlx::Connection as _;
use std::time::{SystemTime, UNIX_EPOCH};
use studentdb::config::DbConfig;
use studentdb::error::StudentError;
use studentdb::store::{NewStudent, PgStudentStore, StudentStore};
use studentdb::system::RealSystem;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    student_id SERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    enrollment_date DATE
)";

fn store() -> PgStudentStore {
    let config = DbConfig::from_system(&RealSystem::new()).unwrap();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        let mut conn = sqlx::PgConnection::connect_with(&config.connect_options())
            .await
            .unwrap();
        sqlx::query(SCHEMA).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
    });

    PgStudentStore::new(config).unwrap()
}

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}.{}.{nanos}@example.com", std::process::id())
}

fn new_student(email: String) -> NewStudent {
    NewStudent {
        first_name: "Ana".to_owned(),
        last_name: "Lopez".to_owned(),
        email,
        enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1),
    }
}

#[test]
#[ignore = "requires database"]
fn insert_list_update_delete_round_trip() {
    let store = store();
    let student = new_student(unique_email("roundtrip"));

    let student_id = store.insert(&student).unwrap();
    let listed = store.list().unwrap();
    let matching: Vec<_> = listed.iter().filter(|s| s.student_id == student_id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(*matching[0], student.clone().into_student(student_id));

    let new_email = unique_email("updated");
    assert_eq!(store.update_email(student_id, &new_email).unwrap(), 1);
    let updated = store.list().unwrap();
    let row = updated.iter().find(|s| s.student_id == student_id).unwrap();
    assert_eq!(row.email, new_email);

    assert_eq!(store.delete(student_id).unwrap(), 1);
    assert_eq!(store.delete(student_id).unwrap(), 0);
    assert_eq!(store.update_email(student_id, "gone@example.com").unwrap(), 0);
}

#[test]
#[ignore = "requires database"]
fn ids_increase_across_inserts() {
    let store = store();

    let first = store.insert(&new_student(unique_email("first"))).unwrap();
    let second = store.insert(&new_student(unique_email("second"))).unwrap();
    assert!(second > first);

    store.delete(first).unwrap();
    store.delete(second).unwrap();
}

#[test]
#[ignore = "requires database"]
fn duplicate_email_is_constraint_violation() {
    let store = store();
    let email = unique_email("duplicate");
    let student_id = store.insert(&new_student(email.clone())).unwrap();
    let count_before = store.list().unwrap().len();

    let err = store.insert(&new_student(email)).unwrap_err();

    assert!(matches!(err, StudentError::Constraint { .. }));
    assert_eq!(store.list().unwrap().len(), count_before);
    store.delete(student_id).unwrap();
}

#[test]
#[ignore = "requires database"]
fn listing_is_ordered_by_id() {
    let store = store();
    let students = store.list().unwrap();
    assert!(students.windows(2).all(|w| w[0].student_id < w[1].student_id));
}
