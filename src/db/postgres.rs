//! PostgreSQL statements for the live target.

use super::SequenceReset;
use hospital_data::{SqlValue, Table};
use sqlx::postgres::PgConnection;
use sqlx::query::Query;
use sqlx::Postgres;

type PgQuery<'q> = Query<'q, Postgres, <Postgres as sqlx::Database>::Arguments<'q>>;

pub async fn table_exists(conn: &mut PgConnection, table: Table) -> sqlx::Result<bool> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT FROM information_schema.tables WHERE table_name = $1)",
    )
    .bind(table.name())
    .fetch_one(conn)
    .await
}

/// All primary keys of `table`, widened to BIGINT so SERIAL and BIGSERIAL decode alike
pub async fn fetch_ids(conn: &mut PgConnection, table: Table) -> sqlx::Result<Vec<i64>> {
    let sql = format!(
        "SELECT {}::bigint FROM {}",
        table.id_column(),
        table.name()
    );
    sqlx::query_scalar(&sql).fetch_all(conn).await
}

/// Execute `sql` (from [`insert_sql`]) with `row` bound in column order
pub async fn insert(conn: &mut PgConnection, sql: &str, row: &[SqlValue]) -> sqlx::Result<()> {
    let mut query = sqlx::query(sql);
    for value in row {
        query = bind_value(query, value);
    }
    query.execute(conn).await?;
    Ok(())
}

/// Restart the table's serial sequence at 1.
///
/// Runs outside any transaction: a failed statement would otherwise abort
/// every reset that follows it.
pub async fn reset_sequence(
    conn: &mut PgConnection,
    table: Table,
) -> sqlx::Result<SequenceReset> {
    let sequence: Option<String> = sqlx::query_scalar("SELECT pg_get_serial_sequence($1, $2)")
        .bind(table.name())
        .bind(table.id_column())
        .fetch_one(&mut *conn)
        .await?;

    let Some(sequence) = sequence else {
        return Ok(SequenceReset::NoSequence);
    };

    // Already quoted and schema-qualified where needed
    sqlx::query(&format!("ALTER SEQUENCE {} RESTART WITH 1", sequence))
        .execute(&mut *conn)
        .await?;

    Ok(SequenceReset::Restarted { sequence })
}

pub fn insert_sql(table: Table) -> String {
    let placeholders = (1..=table.columns().len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name(),
        table.columns().join(", "),
        placeholders
    )
}

/// Integers bind as INT8 and amounts as FLOAT8; both have assignment casts to
/// the narrower INT4/NUMERIC columns. NULL is typed as INT8 for the same reason.
fn bind_value<'q>(query: PgQuery<'q>, value: &'q SqlValue) -> PgQuery<'q> {
    match value {
        SqlValue::Null => query.bind(None::<i64>),
        SqlValue::Int(n) => query.bind(*n),
        SqlValue::Float(n) => query.bind(*n),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Date(d) => query.bind(*d),
        SqlValue::Time(t) => query.bind(*t),
    }
}
