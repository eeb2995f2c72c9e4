//! Migration file discovery
//!
//! Lists a migrations directory and loads every file matching the
//! `<14-digit-timestamp>-<name>.sql` naming convention, ignoring everything
//! else. The result is sorted ascending by version with a stable sort, so
//! the caller never depends on filesystem enumeration order.

use crate::error::CoreResult;
use crate::migration::MigrationUnit;
use crate::version::TIMESTAMP_LEN;
use std::fs;
use std::path::Path;

/// Discover all migration units in `dir`, sorted ascending by version.
///
/// A missing directory yields an empty set: a project with no migrations is
/// a valid (if idle) project, not an error.
pub fn discover_units(dir: &Path) -> CoreResult<Vec<MigrationUnit>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    // Deterministic discovery order, independent of the filesystem
    entries.sort_by_key(|e| e.file_name());

    let mut units = Vec::new();
    for entry in entries {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !matches_naming_convention(file_name) {
            log::debug!("ignoring {file_name}: does not match <timestamp>-<name>.sql");
            continue;
        }
        units.push(MigrationUnit::from_file(&path)?);
    }

    // Stable: equal versions keep discovery order
    units.sort_by(|a, b| a.version.cmp(&b.version));
    Ok(units)
}

/// Check the `<14-digit-timestamp>-<name>.sql` naming convention
fn matches_naming_convention(file_name: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".sql") else {
        return false;
    };
    let Some((prefix, name)) = stem.split_at_checked(TIMESTAMP_LEN) else {
        return false;
    };
    prefix.bytes().all(|b| b.is_ascii_digit())
        && name.starts_with('-')
        && name.len() > 1
        && !name.chars().any(char::is_whitespace)
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
