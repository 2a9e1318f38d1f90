use hospital_data::Table;
use thiserror::Error;

/// Seed failures callers may want to tell apart from I/O or database errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot seed {table}: parent table {parent} has no rows; seed {parent} first")]
    MissingParents { table: Table, parent: Table },

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error(
        "no database configured: pass --database-url, set DATABASE_URL, or add a connection block to the config file"
    )]
    NoConnection,
}

/// `err` and its causes joined with `": "`.
///
/// A cause whose message the previous link already contains is dropped, so a
/// wrapped database error prints its message once.
pub fn display_chain(err: &anyhow::Error) -> String {
    let mut out = String::new();
    let mut previous = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if previous.contains(&text) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(": ");
        }
        out.push_str(&text);
        previous = text;
    }
    out
}
