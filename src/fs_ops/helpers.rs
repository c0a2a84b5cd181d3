//! I/O helper utilities.
//! Small adapter to enrich io::Error with actionable context, usable with
//! map_err in anyhow::Result code paths.

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Returns a closure for `.map_err(...)` wrapping an io::Error with the
/// operation, the path, and a short hint for the common failure modes.
pub(crate) fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                " — permission denied; check ownership and write permissions"
            }
            io::ErrorKind::NotFound => " — path not found; verify it exists",
            io::ErrorKind::AlreadyExists => {
                " — already exists; pick a unique name or remove the target"
            }
            _ => "",
        };
        anyhow!("{} '{}': {}{}", op, path.display(), e, hint)
    }
}
