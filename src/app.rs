//! Application orchestrator.
//! Builds the run configuration from CLI args, initializes logging, installs
//! the signal handler, runs the engine and reports the summary.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use flatsort::cli::Args;
use flatsort::output as out;
use flatsort::{SortError, engine, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_run_config();

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&args.effective_log_level(), args.log_file.as_deref(), args.json)
        .map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current file, then stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting flatsort: {:?}", args);

    let result = engine::run(&cfg);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    match result {
        Ok(summary) => {
            let verb = if cfg.dry_run { "Would move" } else { "Moved" };
            out::print_success(&format!(
                "{} {} files, {} bytes in {} ms",
                verb,
                summary.files_moved,
                summary.bytes_written,
                summary.elapsed.as_millis()
            ));
            Ok(())
        }
        Err(e) => {
            if let Some(se) = e.downcast_ref::<SortError>() {
                match se {
                    SortError::SourceEqualsTarget(path) => {
                        error!(kind = "source_equals_target", path = %path.display(), "Run failed")
                    }
                    SortError::NotADirectory(path) => {
                        error!(kind = "not_a_directory", path = %path.display(), "Run failed")
                    }
                    SortError::NotWritable(path) => {
                        error!(kind = "not_writable", path = %path.display(), "Run failed")
                    }
                    SortError::DryRunBucketMissing(path) => {
                        error!(kind = "dry_run_bucket_missing", path = %path.display(), "Run failed")
                    }
                    SortError::UniquenessExhausted { attempts, src_path } => {
                        error!(kind = "uniqueness_exhausted", attempts = *attempts, source = %src_path.display(), "Run failed")
                    }
                    SortError::CopyIntegrity {
                        path,
                        expected,
                        actual,
                    } => {
                        error!(kind = "copy_integrity", path = %path.display(), expected = *expected, actual = *actual, "Run failed")
                    }
                    SortError::Interrupted => {
                        error!(kind = "interrupted", "Run aborted by user")
                    }
                }
            } else {
                error!(error = ?e, "Run failed");
            }
            out::print_error(&format!("{e:#}"));
            Err(e)
        }
    }
}
