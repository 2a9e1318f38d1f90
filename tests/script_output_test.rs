//! Seed runs rendered as SQL scripts instead of executed.

mod common;

use chrono::NaiveDate;
use hospital_seed::db::{ScriptWriter, Target};
use hospital_seed::seed::{self, SeedConfig};
use hospital_seed::{Dialect, Table};
use sqlx::Executor;
use std::fs;
use tempfile::TempDir;

fn config(plan: Vec<(Table, usize)>) -> SeedConfig {
    SeedConfig {
        plan,
        seed: 7,
        today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ..Default::default()
    }
}

fn script_target(path: &std::path::Path, dialect: Dialect) -> Target {
    let mut writer = ScriptWriter::create(path, dialect).unwrap();
    writer.write_header().unwrap();
    Target::Script(writer)
}

#[tokio::test]
async fn test_postgres_script_contents() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("seed.sql");

    let mut target = script_target(&output, Dialect::Postgres);
    let plan = vec![(Table::Patient, 3), (Table::Room, 4)];
    let stats = seed::run(&mut target, &config(plan)).await.unwrap();
    assert_eq!(stats.total_rows(), 7);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("-- Synthetic hospital data"));
    assert!(content.contains("SELECT setval(pg_get_serial_sequence('patient', 'patient_id'), 1, false);"));
    assert_eq!(content.matches("INSERT INTO patient ").count(), 3);
    assert_eq!(content.matches("INSERT INTO room ").count(), 4);
    assert_eq!(content.matches("BEGIN;").count(), 2);
    assert_eq!(content.matches("COMMIT;").count(), 2);
    assert!(content.contains("DATE '"));
}

#[tokio::test]
async fn test_script_skips_dependents_without_parent_rows() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("seed.sql");

    let mut target = script_target(&output, Dialect::Postgres);
    let stats = seed::run(&mut target, &config(vec![(Table::Payment, 5)]))
        .await
        .unwrap();
    assert_eq!(stats.skipped().count(), 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("INSERT INTO payment"));
    assert!(content.contains("ROLLBACK;"));
}

#[tokio::test]
async fn test_sqlite_script_loads_into_database() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("seed.sql");
    let db = dir.path().join("hospital.db");

    let mut target = script_target(&output, Dialect::Sqlite);
    let plan = vec![
        (Table::Patient, 4),
        (Table::Doctor, 2),
        (Table::Appointment, 6),
        (Table::Payment, 3),
    ];
    seed::run(&mut target, &config(plan)).await.unwrap();
    drop(target);

    let mut conn = common::create_database(&db).await;
    let script = fs::read_to_string(&output).unwrap();
    conn.execute(script.as_str()).await.unwrap();

    assert_eq!(common::count(&mut conn, Table::Patient).await, 4);
    assert_eq!(common::count(&mut conn, Table::Appointment).await, 6);

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM appointment \
         WHERE patient_id NOT IN (SELECT patient_id FROM patient) \
            OR doctor_id NOT IN (SELECT doctor_id FROM doctor)",
    )
    .fetch_one(&mut conn)
    .await
    .unwrap();
    assert_eq!(orphans, 0);
}
