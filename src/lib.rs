// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod progress;
pub mod seed;

pub use hospital_data::{Dialect, Generator, ParentIds, SqlValue, Table};
