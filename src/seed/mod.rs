//! Seed driver: sequence reset followed by every table generator in
//! parent-before-child order.

mod reset;

pub use reset::{reset_sequences, ResetStats};

use crate::db::{Session, Target};
use crate::error::SeedError;
use crate::progress::row_progress;
use chrono::NaiveDate;
use hospital_data::{Generator, ParentIds, Table};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Configuration for a seed run
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Tables to generate with their row counts, in generation order
    pub plan: Vec<(Table, usize)>,
    /// RNG seed for the record generator
    pub seed: u64,
    /// Reference date for ages and date ranges
    pub today: NaiveDate,
    /// Restart every table's id sequence before generating
    pub reset_sequences: bool,
    /// Fail instead of skipping a table whose parents are empty
    pub strict: bool,
    /// Show a progress bar per table
    pub progress: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            plan: Table::SEED_ORDER
                .iter()
                .map(|t| (*t, t.default_rows()))
                .collect(),
            seed: 0,
            today: chrono::Local::now().date_naive(),
            reset_sequences: true,
            strict: false,
            progress: false,
        }
    }
}

/// How a table generator finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOutcome {
    Inserted,
    /// Nothing inserted because this parent table had no rows
    Skipped { missing: Table },
}

/// Statistics for one table generator call
#[derive(Debug, Clone)]
pub struct TableStats {
    pub table: Table,
    pub requested: usize,
    pub inserted: u64,
    pub outcome: TableOutcome,
    pub elapsed: Duration,
}

/// Statistics from a seed run
#[derive(Debug, Clone, Default)]
pub struct SeedStats {
    pub reset: Option<ResetStats>,
    pub tables: Vec<TableStats>,
}

impl SeedStats {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.inserted).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &TableStats> {
        self.tables
            .iter()
            .filter(|t| matches!(t.outcome, TableOutcome::Skipped { .. }))
    }
}

/// Run the full pipeline against `target`
pub async fn run(target: &mut Target, config: &SeedConfig) -> anyhow::Result<SeedStats> {
    let mut stats = SeedStats::default();

    if config.reset_sequences {
        stats.reset = Some(reset_sequences(target, &Table::ALL).await?);
    }

    let mut generator = Generator::new(config.seed, config.today);
    for &(table, rows) in &config.plan {
        let table_stats = seed_table(target, &mut generator, table, rows, config).await?;
        stats.tables.push(table_stats);
    }

    target.finish()?;
    Ok(stats)
}

/// Insert `rows` generated rows into `table` inside one transaction.
///
/// Dependent tables read their parents' ids first; when a parent has none the
/// call inserts nothing and reports the table as skipped, or fails with
/// [`SeedError::MissingParents`] in strict mode.
pub async fn seed_table(
    target: &mut Target,
    generator: &mut Generator,
    table: Table,
    rows: usize,
    config: &SeedConfig,
) -> anyhow::Result<TableStats> {
    let start = Instant::now();
    let mut conn = target.connect().await?;
    let mut session = conn.begin().await?;

    let parents = load_parents(&mut session, table).await?;
    if let Some(missing) = parents.missing_for(table) {
        session.rollback().await?;
        conn.close().await?;
        if config.strict {
            return Err(SeedError::MissingParents {
                table,
                parent: missing,
            }
            .into());
        }
        warn!(
            "No {} rows found, skipping {}. Insert {} first.",
            missing, table, missing
        );
        return Ok(TableStats {
            table,
            requested: rows,
            inserted: 0,
            outcome: TableOutcome::Skipped { missing },
            elapsed: start.elapsed(),
        });
    }

    let pb = row_progress(table, rows, config.progress)?;
    let statement = session.prepare_insert(table);
    let mut inserted = 0u64;
    for index in 0..rows {
        let row = generator.row(table, index, &parents);
        session.insert(&statement, &row).await?;
        inserted += 1;
        pb.inc(1);
    }

    session.commit().await?;
    conn.close().await?;
    pb.finish_and_clear();

    let elapsed = start.elapsed();
    info!(
        "Inserted {} {} rows in {:.2}s",
        inserted,
        table,
        elapsed.as_secs_f64()
    );

    Ok(TableStats {
        table,
        requested: rows,
        inserted,
        outcome: TableOutcome::Inserted,
        elapsed,
    })
}

/// Read every parent id of `table`; a missing parent table reads as empty
async fn load_parents(session: &mut Session<'_>, table: Table) -> anyhow::Result<ParentIds> {
    let mut parents = ParentIds::new();
    for &parent in table.parents() {
        if !session.table_exists(parent).await? {
            debug!("Parent table {} of {} does not exist", parent, table);
            parents.insert(parent, Vec::new());
            continue;
        }
        let ids = session.fetch_ids(parent).await?;
        debug!("Loaded {} {} ids for {}", ids.len(), parent, table);
        parents.insert(parent, ids);
    }
    Ok(parents)
}
