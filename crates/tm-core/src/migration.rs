//! Migration units parsed from SQL files
//!
//! A migration file holds both directions of one change, separated by
//! `-- tidemark:up` and `-- tidemark:down` marker lines:
//!
//! ```sql
//! -- tidemark:up
//! CREATE TABLE users (id INTEGER);
//!
//! -- tidemark:down
//! DROP TABLE users;
//! ```

use crate::error::{CoreError, CoreResult};
use crate::version::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line that begins the forward (apply) section
pub const UP_MARKER: &str = "-- tidemark:up";

/// Marker line that begins the backward (revert) section
pub const DOWN_MARKER: &str = "-- tidemark:down";

/// One discrete, versioned forward/backward change
#[derive(Debug, Clone)]
pub struct MigrationUnit {
    /// Timestamp-derived version parsed from the file name
    pub version: Version,

    /// Human-readable name (the version's suffix)
    pub name: String,

    /// SQL executed when the unit is applied
    pub up_sql: String,

    /// SQL executed when the unit is reverted
    pub down_sql: String,

    /// Source file the unit was loaded from
    pub path: PathBuf,
}

impl MigrationUnit {
    /// Load a migration unit from a `<timestamp>-<name>.sql` file.
    ///
    /// The file stem must parse as a [`Version`] and the content must
    /// contain both direction markers.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CoreError::MigrationParseError {
                path: path.display().to_string(),
                message: "file name is not valid UTF-8".to_string(),
            })?;

        let version = Version::parse(stem)?;
        let content = fs::read_to_string(path)?;
        let (up_sql, down_sql) = split_sections(&content, path)?;

        Ok(Self {
            name: version.name().to_string(),
            version,
            up_sql,
            down_sql,
            path: path.to_path_buf(),
        })
    }
}

/// Which section a line belongs to while scanning a migration file
enum Section {
    Preamble,
    Up,
    Down,
}

/// Split migration file content into its up and down SQL.
///
/// Lines before the first marker are ignored (header comments). Both markers
/// must be present; either may introduce an empty section.
fn split_sections(content: &str, path: &Path) -> CoreResult<(String, String)> {
    let mut up = String::new();
    let mut down = String::new();
    let mut section = Section::Preamble;
    let mut saw_up = false;
    let mut saw_down = false;

    for line in content.lines() {
        match line.trim() {
            UP_MARKER => {
                section = Section::Up;
                saw_up = true;
            }
            DOWN_MARKER => {
                section = Section::Down;
                saw_down = true;
            }
            _ => {
                let buf = match section {
                    Section::Preamble => continue,
                    Section::Up => &mut up,
                    Section::Down => &mut down,
                };
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    let missing = match (saw_up, saw_down) {
        (false, _) => Some(UP_MARKER),
        (_, false) => Some(DOWN_MARKER),
        _ => None,
    };
    if let Some(marker) = missing {
        return Err(CoreError::MigrationParseError {
            path: path.display().to_string(),
            message: format!("missing `{marker}` marker"),
        });
    }

    Ok((up.trim().to_string(), down.trim().to_string()))
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
