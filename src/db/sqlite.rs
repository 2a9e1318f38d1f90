//! SQLite statements for the live target.

use super::SequenceReset;
use hospital_data::{SqlValue, Table};
use sqlx::query::Query;
use sqlx::sqlite::SqliteConnection;
use sqlx::Sqlite;

type SqliteQuery<'q> = Query<'q, Sqlite, <Sqlite as sqlx::Database>::Arguments<'q>>;

pub async fn table_exists(conn: &mut SqliteConnection, table: Table) -> sqlx::Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table.name())
            .fetch_one(conn)
            .await?;
    Ok(count > 0)
}

pub async fn fetch_ids(conn: &mut SqliteConnection, table: Table) -> sqlx::Result<Vec<i64>> {
    let sql = format!("SELECT {} FROM {}", table.id_column(), table.name());
    sqlx::query_scalar(&sql).fetch_all(conn).await
}

/// Execute `sql` (from [`insert_sql`]) with `row` bound in column order
pub async fn insert(
    conn: &mut SqliteConnection,
    sql: &str,
    row: &[SqlValue],
) -> sqlx::Result<()> {
    let mut query = sqlx::query(sql);
    for value in row {
        query = bind_value(query, value);
    }
    query.execute(conn).await?;
    Ok(())
}

/// SQLite keeps AUTOINCREMENT high-water marks in `sqlite_sequence`; dropping the
/// table's entry makes the next id `max(rowid) + 1`, i.e. 1 for an empty table.
/// Tables declared without AUTOINCREMENT have no sequence to reset.
pub async fn reset_sequence(
    conn: &mut SqliteConnection,
    table: Table,
) -> anyhow::Result<SequenceReset> {
    let ddl: Option<String> =
        sqlx::query_scalar("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table.name())
            .fetch_optional(&mut *conn)
            .await?;

    let Some(ddl) = ddl else {
        anyhow::bail!("no such table: {}", table.name());
    };

    if !ddl.to_uppercase().contains("AUTOINCREMENT") {
        return Ok(SequenceReset::NoSequence);
    }

    sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
        .bind(table.name())
        .execute(&mut *conn)
        .await?;

    Ok(SequenceReset::Restarted {
        sequence: format!("sqlite_sequence[{}]", table.name()),
    })
}

pub fn insert_sql(table: Table) -> String {
    let placeholders = vec!["?"; table.columns().len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name(),
        table.columns().join(", "),
        placeholders
    )
}

fn bind_value<'q>(query: SqliteQuery<'q>, value: &'q SqlValue) -> SqliteQuery<'q> {
    match value {
        SqlValue::Null => query.bind(None::<i64>),
        SqlValue::Int(n) => query.bind(*n),
        SqlValue::Float(n) => query.bind(*n),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Date(d) => query.bind(*d),
        SqlValue::Time(t) => query.bind(*t),
    }
}
