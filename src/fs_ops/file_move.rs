//! Single-file move pipeline.
//! Logs the mapping, streams the copy, verifies byte counts, runs the
//! post-process hook, applies the normalization timestamp, and deletes the
//! source when asked to.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::errors::SortError;

use super::helpers::io_error_with_help;
use super::timestamps::file_time_of;
use super::walk::{FileKind, FileRecord};
use super::{io_copy, postprocess};

/// Move `record` to `target`, which the resolver has confirmed free.
///
/// The intended mapping is logged even in dry-run. A copy is accepted only
/// when the streamed byte count and the destination's length both equal the
/// source's length; any mismatch is fatal for the batch. Post-processing
/// failures are logged and swallowed; source deletion is best-effort.
pub fn move_file(cfg: &RunConfig, record: &FileRecord, target: &Path) -> Result<()> {
    info!(
        src = %record.path.display(),
        dest = %target.display(),
        "Move"
    );

    if cfg.dry_run {
        return Ok(());
    }

    // The walker only hands out regular files; re-check in case the path
    // changed underneath us between scan and move.
    let meta = fs::metadata(&record.path)
        .map_err(io_error_with_help("stat source file", &record.path))?;
    if FileKind::of(&meta) != FileKind::RegularFile {
        warn!(path = %record.path.display(), "Source is no longer a regular file; skipping");
        return Ok(());
    }

    let expected = meta.len();
    let copied = io_copy::copy_streaming(&record.path, target)
        .map_err(io_error_with_help("copy to target", target))?;
    if copied != expected {
        return Err(SortError::CopyIntegrity {
            path: record.path.clone(),
            expected,
            actual: copied,
        }
        .into());
    }
    let written = fs::metadata(target)
        .map_err(io_error_with_help("stat copied file", target))?
        .len();
    if written != expected {
        return Err(SortError::CopyIntegrity {
            path: record.path.clone(),
            expected,
            actual: written,
        }
        .into());
    }

    if let Some(command) = &cfg.post_process {
        // A broken external tool must not abort the batch.
        if let Err(e) = postprocess::post_process(command, target) {
            warn!(file = %target.display(), error = %e, "Post-process command failed");
        }
    }

    if let Some(ts) = &cfg.timestamp {
        let _ = filetime::set_file_mtime(target, file_time_of(ts));
    }

    if cfg.delete_source {
        // Best-effort: a source we cannot delete stays behind, the move stands.
        if let Err(e) = fs::remove_file(&record.path) {
            warn!(path = %record.path.display(), error = %e, "Failed to delete source file");
        }
    }

    Ok(())
}
