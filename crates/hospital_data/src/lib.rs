//! Synthetic record generator for the hospital schema.
//!
//! Produces deterministic, FK-consistent rows for every hospital table without
//! touching a database. The `hospital-seed` binary feeds these rows to a live
//! database or a SQL script.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hospital_data::{Generator, ParentIds, Table};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut gen = Generator::new(42, today);
//!
//! let mut parents = ParentIds::new();
//! parents.insert(Table::Patient, vec![1, 2, 3]);
//!
//! let row = gen.row(Table::Payment, 0, &parents);
//! assert_eq!(row.len(), Table::Payment.columns().len());
//! ```

pub mod fake;
pub mod generator;
pub mod schema;

pub use generator::{Dialect, Generator, ParentIds, Row, SqlValue};
pub use schema::Table;
