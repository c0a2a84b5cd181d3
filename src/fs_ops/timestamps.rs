//! Directory timestamp normalization.
//!
//! Runs once, after all files are moved: dropping a file into a directory
//! bumps that directory's own mtime, so directories are stamped last,
//! children before parents, the target root itself at the very end.

use chrono::{DateTime, Utc};
use filetime::FileTime;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Convert the configured instant to a filesystem timestamp.
pub(super) fn file_time_of(ts: &DateTime<Utc>) -> FileTime {
    FileTime::from_unix_time(ts.timestamp(), ts.timestamp_subsec_nanos())
}

/// Set the modification time of every directory under `root`, including
/// `root` itself, to `ts`, bottom-up.
///
/// walkdir's `contents_first` iteration yields children before their parent
/// (the root comes last), with no recursion-depth ceiling on deep trees.
/// Individual failures are logged and skipped; a directory we cannot stamp
/// does not undo the moves that already happened.
pub fn set_timestamp_for_dirs(root: &Path, ts: &DateTime<Utc>) {
    let mtime = file_time_of(ts);
    for entry in WalkDir::new(root).follow_links(false).contents_first(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry in timestamp pass");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            if let Err(e) = filetime::set_file_mtime(entry.path(), mtime) {
                warn!(path = %entry.path().display(), error = %e, "Failed to set directory timestamp");
            }
        }
    }
}
