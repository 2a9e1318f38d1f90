//! Best-effort sequence resetter.

use crate::db::{SequenceReset, Target};
use crate::error::display_chain;
use hospital_data::Table;
use tracing::{info, warn};

/// What happened to each table's sequence
#[derive(Debug, Default, Clone)]
pub struct ResetStats {
    pub restarted: Vec<Table>,
    pub without_sequence: Vec<Table>,
    pub failed: Vec<(Table, String)>,
}

/// Restart every listed table's id sequence at 1.
///
/// A failure on one table is logged and recorded; the remaining tables are
/// still processed. Only failing to connect at all is returned as an error.
pub async fn reset_sequences(target: &mut Target, tables: &[Table]) -> anyhow::Result<ResetStats> {
    let mut stats = ResetStats::default();
    let mut conn = target.connect().await?;

    for &table in tables {
        match conn.reset_sequence(table).await {
            Ok(SequenceReset::Restarted { sequence }) => {
                info!("Reset sequence for {} (using {})", table, sequence);
                stats.restarted.push(table);
            }
            Ok(SequenceReset::NoSequence) => {
                warn!("No sequence found for {}.{}", table, table.id_column());
                stats.without_sequence.push(table);
            }
            Err(e) => {
                let message = display_chain(&e);
                warn!("Could not reset sequence for {}: {}", table, message);
                stats.failed.push((table, message));
            }
        }
    }

    conn.close().await?;
    Ok(stats)
}
