//! The persisted target pointer
//!
//! A single text file (`tidemark.lock`) holding the full identifier of the
//! version the project should be synchronized to. Absent pointer means
//! "converge to the latest known version": apply everything, never revert.

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationUnit;
use crate::version::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the target pointer, relative to the project root
pub const LOCK_FILE: &str = "tidemark.lock";

/// Reader/writer for the target pointer file
#[derive(Debug, Clone)]
pub struct TargetFile {
    path: PathBuf,
}

impl TargetFile {
    /// Point at an explicit lock file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The conventional lock file location for a project root
    pub fn for_project(root: &Path) -> Self {
        Self::new(root.join(LOCK_FILE))
    }

    /// Read the persisted target, if any.
    ///
    /// Trailing whitespace and newlines are incidental and trimmed before
    /// parsing; a missing or empty file is simply "no target".
    pub fn read(&self) -> CoreResult<Option<Version>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Version::parse(trimmed).map(Some)
    }

    /// Validate `raw` against the known units and persist it as the target.
    ///
    /// Fails with `UnknownVersion` when no discovered unit carries this
    /// version, leaving the previously persisted pointer untouched. The
    /// matched unit's full identifier is what gets written, so a bare
    /// timestamp argument still persists the canonical form.
    pub fn write(&self, units: &[MigrationUnit], raw: &str) -> CoreResult<Version> {
        let requested = Version::parse(raw)?;
        let unit = units
            .iter()
            .find(|u| u.version == requested)
            .ok_or_else(|| CoreError::UnknownVersion {
                version: raw.to_string(),
            })?;

        let version = unit.version.clone();
        self.persist(version.as_identifier())?;
        Ok(version)
    }

    /// Persist `version` unconditionally.
    ///
    /// Used by `create`, where the version is brand new and by definition
    /// not yet in the discovered set.
    pub fn advance(&self, version: &Version) -> CoreResult<()> {
        self.persist(version.as_identifier())
    }

    /// Atomic write via temp file + rename
    fn persist(&self, id: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("lock.tmp");
        fs::write(&temp_path, id)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Location of the pointer file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The Nth-from-last known version (offset 0 = latest).
///
/// `units` must be sorted ascending, which is what discovery returns.
pub fn latest_version(units: &[MigrationUnit], offset: usize) -> CoreResult<&Version> {
    if units.is_empty() {
        return Err(CoreError::NoMigrations);
    }
    if offset >= units.len() {
        return Err(CoreError::OutOfRange {
            offset,
            count: units.len(),
        });
    }
    Ok(&units[units.len() - 1 - offset].version)
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
