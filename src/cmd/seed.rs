//! Seed command CLI handler.

use crate::config::parse_table_list;
use crate::db::{ScriptWriter, Target};
use crate::seed::{self, SeedConfig, TableOutcome};
use anyhow::Context;
use hospital_data::Dialect;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[allow(clippy::too_many_arguments)]
pub fn run(
    database_url: Option<String>,
    config: Option<PathBuf>,
    rows: Option<usize>,
    tables: Option<String>,
    seed: Option<u64>,
    no_reset: bool,
    strict: bool,
    progress: bool,
    output: Option<PathBuf>,
    dialect: Option<String>,
    verbose: bool,
) -> anyhow::Result<()> {
    crate::logging::init(verbose);

    let yaml = super::load_config(config.as_deref())?;

    let only = tables.as_deref().map(parse_table_list).transpose()?;
    let plan = yaml.plan(rows, only.as_deref());
    if plan.is_empty() {
        anyhow::bail!("No tables left to seed after applying --tables and config skips");
    }

    // Generate random seed if not provided
    let seed = seed.or(yaml.seed).unwrap_or_else(rand::random);
    info!("Using seed {} (pass --seed {} to reproduce)", seed, seed);

    let mut target = match output {
        Some(path) => script_target(&path, dialect.as_deref(), database_url.as_deref())?,
        None => super::open_live_target(database_url.as_deref(), &yaml)?,
    };
    info!("Seeding {}", target.describe());

    let seed_config = SeedConfig {
        plan,
        seed,
        today: chrono::Local::now().date_naive(),
        reset_sequences: !no_reset,
        strict,
        progress,
    };

    let start = Instant::now();
    let stats = super::runtime()?.block_on(seed::run(&mut target, &seed_config))?;
    let elapsed = start.elapsed();

    eprintln!();
    eprintln!("Seed Statistics:");
    if let Some(reset) = &stats.reset {
        eprintln!(
            "  Sequences reset: {} ({} without sequence, {} failed)",
            reset.restarted.len(),
            reset.without_sequence.len(),
            reset.failed.len()
        );
    }
    eprintln!(
        "  Tables seeded: {}",
        stats.tables.len() - stats.skipped().count()
    );
    eprintln!("  Total rows: {}", stats.total_rows());
    eprintln!("  Seed: {}", seed);

    let skipped: Vec<_> = stats.skipped().collect();
    if !skipped.is_empty() {
        eprintln!();
        for table_stats in skipped {
            if let TableOutcome::Skipped { missing } = table_stats.outcome {
                eprintln!(
                    "  Warning: {} skipped, {} has no rows",
                    table_stats.table, missing
                );
            }
        }
    }

    if verbose {
        eprintln!();
        eprintln!("Per-table breakdown:");
        for table_stats in &stats.tables {
            eprintln!(
                "  {}: {} / {} rows ({:.2}s)",
                table_stats.table,
                table_stats.inserted,
                table_stats.requested,
                table_stats.elapsed.as_secs_f64()
            );
        }
    }

    eprintln!();
    eprintln!(
        "Data insertion complete in {:.2}s",
        elapsed.as_secs_f64()
    );

    Ok(())
}

/// Script output: `--dialect` first, then the URL scheme, then PostgreSQL
fn script_target(
    path: &Path,
    dialect: Option<&str>,
    database_url: Option<&str>,
) -> anyhow::Result<Target> {
    let dialect = match (dialect, database_url) {
        (Some(d), _) => d.parse::<Dialect>().map_err(|e| anyhow::anyhow!("{}", e))?,
        (None, Some(url)) => Target::from_url(url)?.dialect(),
        (None, None) => Dialect::default(),
    };

    let mut writer = ScriptWriter::create(path, dialect)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    writer.write_header()?;
    Ok(Target::Script(writer))
}
