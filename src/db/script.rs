//! SQL script target: renders a seed run as literal statements instead of
//! executing them.

use super::SequenceReset;
use hospital_data::{Dialect, SqlValue, Table};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;
pub const STMT_BUFFER_COUNT: usize = 100;

/// Buffered statement writer that also simulates the tables' serial ids.
///
/// Parent ids handed to dependent tables are `1..=n`, where `n` is the number of
/// rows this script inserted into the parent since its sequence was reset. That
/// matches the database only when the script starts from empty tables with
/// restarted sequences.
pub struct ScriptWriter {
    writer: BufWriter<Box<dyn Write>>,
    dialect: Dialect,
    write_count: usize,
    max_stmt_buffer: usize,
    rows_written: BTreeMap<Table, i64>,
    statements: u64,
}

impl ScriptWriter {
    pub fn new(output: Box<dyn Write>, dialect: Dialect) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, output),
            dialect,
            write_count: 0,
            max_stmt_buffer: STMT_BUFFER_COUNT,
            rows_written: BTreeMap::new(),
            statements: 0,
        }
    }

    /// Open `path` for writing, or stdout for `-`
    pub fn create(path: &Path, dialect: Dialect) -> io::Result<Self> {
        let output: Box<dyn Write> = if path.as_os_str() == "-" {
            Box::new(io::stdout())
        } else {
            Box::new(File::create(path)?)
        };
        Ok(Self::new(output, dialect))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Number of statements written so far
    pub fn statements(&self) -> u64 {
        self.statements
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.writer, "-- Synthetic hospital data")?;
        writeln!(self.writer, "-- Dialect: {}", self.dialect)?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn write_statement(&mut self, stmt: &str) -> io::Result<()> {
        self.writer.write_all(stmt.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.statements += 1;

        self.write_count += 1;
        if self.write_count >= self.max_stmt_buffer {
            self.write_count = 0;
            self.writer.flush()?;
        }

        Ok(())
    }

    pub fn begin(&mut self) -> io::Result<()> {
        self.write_statement("BEGIN;")
    }

    pub fn commit(&mut self) -> io::Result<()> {
        self.write_statement("COMMIT;")?;
        self.writer.write_all(b"\n")
    }

    pub fn rollback(&mut self) -> io::Result<()> {
        self.write_statement("ROLLBACK;")?;
        self.writer.write_all(b"\n")
    }

    pub fn insert(&mut self, table: Table, row: &[SqlValue]) -> io::Result<()> {
        let values = row
            .iter()
            .map(|v| v.to_sql(self.dialect))
            .collect::<Vec<_>>()
            .join(", ");
        let stmt = format!(
            "INSERT INTO {} ({}) VALUES ({});",
            table.name(),
            table.columns().join(", "),
            values
        );
        self.write_statement(&stmt)?;
        *self.rows_written.entry(table).or_insert(0) += 1;
        Ok(())
    }

    /// Ids the database would have assigned to this script's rows in `table`
    pub fn fetch_ids(&self, table: Table) -> Vec<i64> {
        let count = self.rows_written.get(&table).copied().unwrap_or(0);
        (1..=count).collect()
    }

    pub fn reset_sequence(&mut self, table: Table) -> io::Result<SequenceReset> {
        let stmt = match self.dialect {
            Dialect::Postgres => format!(
                "SELECT setval(pg_get_serial_sequence('{}', '{}'), 1, false);",
                table.name(),
                table.id_column()
            ),
            Dialect::Sqlite => format!(
                "DELETE FROM sqlite_sequence WHERE name = '{}';",
                table.name()
            ),
        };
        self.write_statement(&stmt)?;
        self.rows_written.remove(&table);
        Ok(SequenceReset::Restarted {
            sequence: format!("{}_{}_seq", table.name(), table.id_column()),
        })
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.write_count = 0;
        self.writer.flush()
    }
}
