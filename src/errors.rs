//! Typed error definitions for flatsort.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Source and target directories must be different: {0}")]
    SourceEqualsTarget(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot write to {0}")]
    NotWritable(PathBuf),

    #[error("Unable to create subdirectory {0} during a dry run")]
    DryRunBucketMissing(PathBuf),

    #[error("Unable to pick a unique name after {attempts} attempts for {src_path}")]
    UniquenessExhausted { attempts: u32, src_path: PathBuf },

    #[error("File copy problem with {path}: expected {expected} bytes, got {actual}")]
    CopyIntegrity {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}
