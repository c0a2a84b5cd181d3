//! Run orchestration.
//! Sequences one batch: validate, scan, per-file moves, directory timestamp
//! normalization, summary. Strictly sequential; any error other than a
//! post-process failure aborts the remaining batch, and files moved before
//! the failure stay moved.

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::RunConfig;
use crate::errors::SortError;
use crate::fs_ops;
use crate::shutdown;

/// Totals reported after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub files_moved: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Execute one batch run under `cfg`.
pub fn run(cfg: &RunConfig) -> Result<RunSummary> {
    let started = Instant::now();

    if cfg.dry_run {
        info!("***** DRY RUN *****");
    }
    cfg.validate()?;

    info!("Processing...");
    info!(sources = ?cfg.sources, "Source dirs");
    info!(target = %cfg.target.display(), "Target dir");
    info!(delete_source = cfg.delete_source, "Delete source");
    info!(enabled = cfg.timestamp.is_some(), timestamp = ?cfg.timestamp, "Set timestamp");
    info!(enabled = cfg.post_process.is_some(), "Post-process");

    info!(dirs = cfg.sources.len(), "Scanning source dirs...");
    let all_files = fs_ops::list_files_recursive(&cfg.sources);
    info!(count = all_files.len(), "Source files found");

    let mut files_moved: u64 = 0;
    let mut bytes_written: u64 = 0;
    for record in &all_files {
        if shutdown::is_requested() {
            return Err(SortError::Interrupted.into());
        }
        bytes_written += record.len;
        let target = fs_ops::resolve_target(&record.path, cfg)?;
        fs_ops::move_file(cfg, record, &target)?;
        files_moved += 1;
    }

    if !cfg.dry_run && let Some(ts) = &cfg.timestamp {
        info!("Setting timestamp on directories...");
        fs_ops::set_timestamp_for_dirs(&cfg.target, ts);
    }

    let elapsed = started.elapsed();
    info!(
        files = files_moved,
        elapsed_ms = elapsed.as_millis() as u64,
        bytes = bytes_written,
        "Processed"
    );
    Ok(RunSummary {
        files_moved,
        bytes_written,
        elapsed,
    })
}
