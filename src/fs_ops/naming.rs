//! Naming policy.
//! A file may keep its current name only when it is already shaped like a
//! canonical 128-bit identifier plus a single extension; everything else
//! gets a freshly generated name.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// 8-4-4-4-12 hex groups (either case), one literal dot, a non-empty
/// extension with no further dots.
static SAFE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\.\w+$",
    )
    .expect("safe-name pattern is valid")
});

/// Whether `name` already satisfies the safe/unique naming convention and
/// may be kept verbatim on the first placement attempt. Pure predicate.
pub fn is_safe_name(name: &str) -> bool {
    SAFE_NAME.is_match(name)
}

/// Extension of `name` including the leading dot, lowercased; empty when
/// the name contains no dot.
fn extract_ext(name: &str) -> String {
    match name.rfind('.') {
        Some(i) => name[i..].to_lowercase(),
        None => String::new(),
    }
}

/// Synthesize a new globally-unique name: a random 128-bit identifier in
/// canonical lowercase hex form, keeping the original's extension.
pub fn generate_unique_name(original: &str) -> String {
    format!("{}{}", Uuid::new_v4(), extract_ext(original))
}
