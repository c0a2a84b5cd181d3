//! Config validation logic.
//! Verifies directory existence and readability, and rejects a target that
//! coincides with any source, before the engine touches the filesystem.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::errors::SortError;

use super::types::RunConfig;

impl RunConfig {
    /// Validate existence, readability and source/target distinctness.
    ///
    /// Runs before any I/O: a violation here means nothing has been scanned,
    /// moved, or created yet.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            bail!("At least one source directory is required");
        }

        for src in &self.sources {
            ensure_dir_exists_and_is_dir(src, "source")?;
            ensure_readable(src, "source")?;
        }

        // The target root is never created by the engine; only bucket
        // subdirectories underneath it are.
        ensure_dir_exists_and_is_dir(&self.target, "target")?;

        let target_real = canonical_or_raw(&self.target);
        for src in &self.sources {
            if canonical_or_raw(src) == target_real {
                error!(
                    source = %src.display(),
                    target = %self.target.display(),
                    "Source and target resolve to the same directory"
                );
                return Err(SortError::SourceEqualsTarget(src.clone()).into());
            }
        }

        info!(
            sources = self.sources.len(),
            target = %self.target.display(),
            "Config validated"
        );
        Ok(())
    }
}

/// Resolve symlinks where possible; fall back to the raw path so comparisons
/// still work on paths we cannot canonicalize.
fn canonical_or_raw(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        return Err(SortError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!(
            "Cannot read {name} directory '{}'; check permissions",
            path.display()
        )
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}
