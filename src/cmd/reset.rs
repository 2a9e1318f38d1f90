//! Reset command CLI handler.

use crate::seed::reset_sequences;
use hospital_data::Table;
use std::path::PathBuf;

pub fn run(database_url: Option<String>, config: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    crate::logging::init(verbose);

    let yaml = super::load_config(config.as_deref())?;
    let mut target = super::open_live_target(database_url.as_deref(), &yaml)?;
    tracing::info!("Resetting sequences on {}", target.describe());

    let stats = super::runtime()?.block_on(reset_sequences(&mut target, &Table::ALL))?;

    eprintln!();
    eprintln!("Sequence Reset:");
    eprintln!("  Restarted: {}", stats.restarted.len());
    if !stats.without_sequence.is_empty() {
        eprintln!("  Without sequence: {}", join(&stats.without_sequence));
    }
    if !stats.failed.is_empty() {
        eprintln!("  Failed:");
        for (table, error) in &stats.failed {
            eprintln!("    {}: {}", table, error);
        }
    }

    Ok(())
}

fn join(tables: &[Table]) -> String {
    tables
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}
