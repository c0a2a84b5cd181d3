//! External post-processing command support.
//!
//! Runs the configured shell template against a moved file: working
//! directory is the file's bucket, and the file's bare name is exported as
//! `$F`. The child is polled with a deadline and killed on overrun; nothing
//! in here may fail the batch, the caller logs and moves on.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::warn;

/// Environment variable carrying the moved file's bare name into the command.
pub const VAR_FILE_NAME: &str = "F";

/// Example template: strip all metadata in place with exiftool.
pub const SAMPLE_CMD: &str = "exiftool -P -overwrite_original -all= $F";

const CMD_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `command` against `file`. Returns Err only when the command could not
/// be started or waited on; non-zero exits and timeouts are logged warnings.
pub fn post_process(command: &str, file: &Path) -> Result<()> {
    run_with_timeout(command, file, CMD_TIMEOUT)
}

fn run_with_timeout(command: &str, file: &Path, timeout: Duration) -> Result<()> {
    let working_dir = file
        .parent()
        .ok_or_else(|| anyhow!("file has no parent directory: {}", file.display()))?;
    let file_name = file
        .file_name()
        .ok_or_else(|| anyhow!("file has no name: {}", file.display()))?;

    #[cfg(unix)]
    let mut cmd = {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    };

    let mut child = cmd
        .current_dir(working_dir)
        .env(VAR_FILE_NAME, file_name)
        .spawn()
        .with_context(|| format!("spawn post-process command '{command}'"))?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    warn!(
                        command,
                        code = status.code(),
                        "Command terminated with non-zero exit"
                    );
                }
                return Ok(());
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    warn!(
                        command,
                        timeout_secs = timeout.as_secs(),
                        "Post-process command timed out; killing it"
                    );
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(());
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(e).context("wait for post-process command");
            }
        }
    }
}
