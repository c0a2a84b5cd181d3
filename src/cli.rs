//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! The CLI is a thin driver: it only assembles a RunConfig and hands it to
//! the engine, the same contract an embedding front end would use.

use chrono::{DateTime, Utc};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{LogLevel, RunConfig};
use crate::fs_ops::{SAMPLE_CMD, VAR_FILE_NAME};

/// CLI wrapper for the flatsort library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Flatten file dumps into a bucketed, uniquely-named target tree",
    after_help = format!(
        "Post-process commands run with the file's bucket as working directory and \
the bare file name exported as ${VAR_FILE_NAME}. Example:\n  {SAMPLE_CMD}"
    )
)]
pub struct Args {
    /// Source directories to drain (at least one; scanned recursively).
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath, required = true, num_args = 1..)]
    pub sources: Vec<PathBuf>,

    /// Target directory; must already exist. Bucket subdirectories are
    /// created underneath as needed.
    #[arg(short = 't', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub target: PathBuf,

    /// Delete each source file after its copy is verified.
    #[arg(long)]
    pub delete_source: bool,

    /// Show what would be done, but do not modify files/directories.
    #[arg(long)]
    pub dry_run: bool,

    /// Normalize timestamps: apply this RFC 3339 instant (e.g.
    /// 2020-01-01T00:00:00Z) to every moved file and, afterwards, to every
    /// directory under the target root.
    #[arg(long, value_name = "INSTANT")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Shell command run against each moved file; see the example below.
    #[arg(long, value_name = "CMD")]
    pub post_process: Option<String>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    /// Assemble the immutable run configuration the engine consumes.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            sources: self.sources.clone(),
            target: self.target.clone(),
            delete_source: self.delete_source,
            dry_run: self.dry_run,
            timestamp: self.timestamp,
            post_process: self.post_process.clone(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_invocation() {
        let args = Args::parse_from([
            "flatsort",
            "/in/a",
            "/in/b",
            "--target",
            "/out",
            "--delete-source",
            "--timestamp",
            "2020-01-01T00:00:00Z",
            "--post-process",
            "touch done",
        ]);
        let cfg = args.to_run_config();
        assert_eq!(cfg.sources.len(), 2);
        assert_eq!(cfg.target, PathBuf::from("/out"));
        assert!(cfg.delete_source);
        assert!(!cfg.dry_run);
        assert_eq!(cfg.timestamp.unwrap().timestamp(), 1_577_836_800);
        assert_eq!(cfg.post_process.as_deref(), Some("touch done"));
    }

    #[test]
    fn sources_are_required() {
        assert!(Args::try_parse_from(["flatsort", "--target", "/out"]).is_err());
    }

    #[test]
    fn bad_timestamp_is_rejected_at_parse_time() {
        assert!(
            Args::try_parse_from([
                "flatsort",
                "/in",
                "--target",
                "/out",
                "--timestamp",
                "yesterday"
            ])
            .is_err()
        );
    }

    #[test]
    fn debug_flag_wins_over_log_level() {
        let args =
            Args::parse_from(["flatsort", "/in", "--target", "/out", "--log-level", "quiet", "-d"]);
        assert_eq!(args.effective_log_level(), LogLevel::Debug);
    }
}
