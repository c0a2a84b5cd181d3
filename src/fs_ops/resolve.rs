//! Target path resolution.
//! Buckets each file under `target/<first char of its final name>` and
//! resolves collisions by regenerating the name, bounded by a retry limit.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RunConfig;
use crate::errors::SortError;

use super::helpers::io_error_with_help;
use super::naming::{generate_unique_name, is_safe_name};
use super::timestamps::file_time_of;

/// Collision-resolution attempts allowed per source file. Exhausting them
/// fails the file (and with it the batch).
pub const MAX_NAME_ATTEMPTS: u32 = 10;

/// Pick a target path for `source` that does not exist yet.
///
/// The source's own name is kept on the very first attempt when it already
/// satisfies the naming policy; otherwise, and on every retry, a fresh
/// unique name is synthesized. The bucket subdirectory is exactly the first
/// character of the chosen name.
pub fn resolve_target(source: &Path, cfg: &RunConfig) -> Result<PathBuf> {
    let original = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Source file missing a file name: {}", source.display()))?;

    let mut attempts = 0u32;
    loop {
        let name = if attempts == 0 && is_safe_name(&original) {
            original.clone()
        } else {
            generate_unique_name(&original)
        };

        let bucket = bucket_dir(&cfg.target, &name);
        ensure_bucket(&bucket, cfg)?;

        let candidate = bucket.join(&name);
        if !candidate.exists() {
            return Ok(candidate);
        }

        attempts += 1;
        if attempts >= MAX_NAME_ATTEMPTS {
            return Err(SortError::UniquenessExhausted {
                attempts,
                src_path: source.to_path_buf(),
            }
            .into());
        }
        debug!(
            candidate = %candidate.display(),
            attempt = attempts,
            "Target name collision; retrying"
        );
    }
}

/// Bucket subdirectory: the target root joined with the first character of
/// the chosen name, taken verbatim.
fn bucket_dir(target: &Path, name: &str) -> PathBuf {
    let first: String = name.chars().take(1).collect();
    target.join(first)
}

/// An existing bucket must be a writable directory; anything else is a
/// structural problem, not a naming collision, and is never retried.
/// A missing bucket cannot be materialized in a dry run; in a live run it is
/// created (parents included) and stamped with the normalization timestamp
/// right away.
fn ensure_bucket(bucket: &Path, cfg: &RunConfig) -> Result<()> {
    if bucket.exists() {
        if !bucket.is_dir() {
            return Err(SortError::NotADirectory(bucket.to_path_buf()).into());
        }
        if !is_writable(bucket) {
            return Err(SortError::NotWritable(bucket.to_path_buf()).into());
        }
        return Ok(());
    }

    if cfg.dry_run {
        return Err(SortError::DryRunBucketMissing(bucket.to_path_buf()).into());
    }

    fs::create_dir_all(bucket).map_err(io_error_with_help("create bucket directory", bucket))?;
    if let Some(ts) = &cfg.timestamp {
        // Best-effort: directories get a final pass after all moves anyway.
        let _ = filetime::set_file_mtime(bucket, file_time_of(ts));
    }
    Ok(())
}

#[cfg(unix)]
fn is_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    match CString::new(dir.as_os_str().as_bytes()) {
        Ok(c) => unsafe { libc::access(c.as_ptr(), libc::W_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_writable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
