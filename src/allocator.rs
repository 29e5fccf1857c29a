//! Collision-free filename allocation with gap-filling numbering.
//!
//! Collision checking is keyed on the base name with ANY extension: one
//! shared counter per base across all filetypes. Deleting `scratch2.py`
//! frees slot 2 for the next allocation regardless of the requested
//! extension.

use crate::settings::DEFAULT_FILE_PREFIX;
use std::collections::HashSet;

/// Picks a filename of the form `base<n?>ext` that does not collide with any
/// name in `existing`. `ext` must carry its leading dot. The unnumbered name
/// is used when no file occupies the base at all; otherwise the smallest
/// unused positive number is chosen.
pub fn allocate(existing: &[String], base: &str, ext: &str) -> String {
    let base = if base.is_empty() {
        DEFAULT_FILE_PREFIX
    } else {
        base
    };

    let base_taken = existing.iter().any(|name| {
        name.strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('.'))
    });
    if !base_taken {
        return format!("{base}{ext}");
    }

    let taken: HashSet<u64> = existing
        .iter()
        .filter_map(|name| numbered_slot(name, base))
        .collect();
    let number = (1..).find(|n| !taken.contains(n)).unwrap_or(1);
    format!("{base}{number}{ext}")
}

/// Extracts `n` from names shaped `base<n>.<anything>`.
fn numbered_slot(name: &str, base: &str) -> Option<u64> {
    let rest = name.strip_prefix(base)?;
    let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 || !rest[digits_end..].starts_with('.') {
        return None;
    }
    rest[..digits_end].parse().ok().filter(|n| *n > 0)
}
