//! Source tree discovery.
//! Collects every regular file under a set of roots into one flat list.

use std::fs::Metadata;
use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

/// What a path turned out to be. Call sites dispatch on this tag instead of
/// sprinkling `is_file`/`is_dir` predicates around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    RegularFile,
    Directory,
    /// Symlinks, fifos, sockets, devices. Never moved.
    Other,
}

impl FileKind {
    pub fn of(meta: &Metadata) -> Self {
        let ft = meta.file_type();
        if ft.is_file() {
            FileKind::RegularFile
        } else if ft.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Other
        }
    }
}

/// A discovered source file. Created by the walk, consumed once by the move
/// loop, never retained across runs.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub len: u64,
}

/// Recursively collect every regular file under `roots` into one flat list.
///
/// Unbounded depth. Symlinks are never followed, so a symlinked directory
/// cycle cannot loop the walk and a symlink is never mistaken for a plain
/// file. Entries that cannot be read are skipped with a warning rather than
/// failing the scan. No ordering across roots or within a root is
/// guaranteed to callers.
pub fn list_files_recursive(roots: &[PathBuf]) -> Vec<FileRecord> {
    let mut files = Vec::new();
    for root in roots {
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            let meta = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "Skipping entry without metadata");
                    continue;
                }
            };
            if FileKind::of(&meta) == FileKind::RegularFile {
                files.push(FileRecord {
                    path: entry.into_path(),
                    len: meta.len(),
                });
            }
        }
    }
    files
}
