//! Shared SQLite fixtures for the seed integration tests.

#![allow(dead_code)]

use hospital_seed::db::Target;
use hospital_seed::Table;
use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, Executor};
use std::path::Path;

pub const SCHEMA: &str = r#"
CREATE TABLE patient (
    patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    date_of_birth TEXT NOT NULL,
    gender TEXT NOT NULL,
    age INTEGER NOT NULL,
    contact_number TEXT NOT NULL,
    email TEXT NOT NULL,
    address TEXT NOT NULL
);
CREATE TABLE doctor (
    doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    speciality TEXT NOT NULL,
    email TEXT NOT NULL,
    contact_no TEXT NOT NULL
);
CREATE TABLE appointment (
    appointment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patient(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctor(doctor_id),
    appointment_date TEXT NOT NULL,
    appointment_time TEXT NOT NULL,
    appointment_status TEXT NOT NULL
);
CREATE TABLE reception (
    receptionist_id INTEGER PRIMARY KEY AUTOINCREMENT,
    receptionist_name TEXT NOT NULL,
    contact_no TEXT NOT NULL
);
CREATE TABLE department (
    department_id INTEGER PRIMARY KEY AUTOINCREMENT,
    department_name TEXT NOT NULL,
    department_location TEXT NOT NULL
);
CREATE TABLE laboratory (
    test_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patient(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctor(doctor_id),
    test_name TEXT NOT NULL,
    test_date TEXT NOT NULL,
    test_time TEXT NOT NULL,
    test_result TEXT NOT NULL
);
CREATE TABLE staff (
    staff_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    staff_role TEXT NOT NULL,
    contact_number TEXT NOT NULL
);
CREATE TABLE prescription (
    prescription_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patient(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctor(doctor_id),
    patient_procedure TEXT NOT NULL,
    procedure_date TEXT NOT NULL,
    next_appointment TEXT NOT NULL
);
CREATE TABLE administrator (
    admin_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    contact_no TEXT NOT NULL
);
CREATE TABLE medical_history (
    record_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patient(patient_id),
    doctor_id INTEGER NOT NULL REFERENCES doctor(doctor_id),
    diagnosis TEXT NOT NULL,
    treatment_plan TEXT NOT NULL,
    admission_date TEXT NOT NULL,
    discharge_date TEXT NOT NULL
);
CREATE TABLE medicine (
    medicine_id INTEGER PRIMARY KEY AUTOINCREMENT,
    medicine_name TEXT NOT NULL,
    dosage TEXT NOT NULL,
    manufacturer TEXT NOT NULL
);
CREATE TABLE supplier (
    supplier_id INTEGER PRIMARY KEY AUTOINCREMENT,
    supplier_name TEXT NOT NULL,
    contact_no TEXT NOT NULL,
    email TEXT NOT NULL
);
CREATE TABLE room (
    room_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER REFERENCES patient(patient_id),
    room_number INTEGER NOT NULL,
    room_type TEXT NOT NULL,
    status TEXT NOT NULL
);
CREATE TABLE payment (
    payment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patient(patient_id),
    amount REAL NOT NULL,
    payment_status TEXT NOT NULL
);
CREATE TABLE parking (
    driver_id INTEGER PRIMARY KEY AUTOINCREMENT,
    driver_name TEXT NOT NULL,
    driver_contact TEXT NOT NULL,
    vehicle_type TEXT NOT NULL,
    vehicle_no TEXT NOT NULL,
    exit_time TEXT NOT NULL
);
"#;

pub fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

/// Create a database file at `path` holding the full hospital schema
pub async fn create_database(path: &Path) -> SqliteConnection {
    let url = format!("{}?mode=rwc", sqlite_url(path));
    let mut conn = SqliteConnection::connect(&url).await.unwrap();
    conn.execute(SCHEMA).await.unwrap();
    conn
}

pub fn target(path: &Path) -> Target {
    Target::from_url(&sqlite_url(path)).unwrap()
}

pub async fn count(conn: &mut SqliteConnection, table: Table) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    sqlx::query_scalar(&sql).fetch_one(conn).await.unwrap()
}

pub async fn ids(conn: &mut SqliteConnection, table: Table) -> Vec<i64> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        table.id_column(),
        table.name(),
        table.id_column()
    );
    sqlx::query_scalar(&sql).fetch_all(conn).await.unwrap()
}
