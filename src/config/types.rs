//! Core configuration types.
//! - RunConfig holds one run's settings and is immutable for the run's duration.
//! - LogLevel represents verbosity with simple parsing helpers.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Configuration for a single batch run.
///
/// `timestamp` and `post_process` double as enable flags: `Some` turns the
/// feature on and carries its value, so an enabled feature can never be
/// missing its parameter.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directories to drain; each must exist and be readable.
    pub sources: Vec<PathBuf>,
    /// Destination root; must already exist. Bucket subdirectories are
    /// created underneath as needed (never the root itself).
    pub target: PathBuf,
    /// Delete each source file once its copy is verified.
    pub delete_source: bool,
    /// Log intended moves but perform no filesystem mutation.
    pub dry_run: bool,
    /// Instant applied to every moved file and, afterwards, to every
    /// directory under the target root.
    pub timestamp: Option<DateTime<Utc>>,
    /// Shell command template run against each moved file.
    pub post_process: Option<String>,
}

impl RunConfig {
    /// Construct a config with explicit paths; optional features stay off.
    pub fn new(sources: Vec<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            target: target.into(),
            delete_source: false,
            dry_run: false,
            timestamp: None,
            post_process: None,
        }
    }
}
