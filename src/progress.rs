//! Shared progress bar setup for the per-table generators.

use hospital_data::Table;
use indicatif::{ProgressBar, ProgressStyle};

/// Row-count progress bar for one table; hidden unless `enabled`
pub fn row_progress(table: Table, rows: usize, enabled: bool) -> anyhow::Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(rows as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )?
        .progress_chars("█▓▒░  ")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(format!("Inserting {}", table));
    Ok(pb)
}
