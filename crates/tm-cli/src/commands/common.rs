//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tm_core::{discover_units, Config, MigrationUnit, TargetFile};
use tm_db::Strategy;

use crate::cli::GlobalArgs;

/// A loaded project: root directory plus parsed configuration
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
}

impl ProjectContext {
    /// Load the project named by the global CLI arguments
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&global.project_dir);
        let config = Config::load(&root).context("Failed to load project config")?;
        Ok(Self { root, config })
    }

    /// Absolute migrations directory
    pub(crate) fn migration_dir(&self) -> PathBuf {
        self.config.migration_dir(&self.root)
    }

    /// Discover all migration units, ascending by version
    pub(crate) fn discover(&self) -> Result<Vec<MigrationUnit>> {
        discover_units(&self.migration_dir()).context("Failed to load migrations")
    }

    /// The project's target pointer file
    pub(crate) fn target_file(&self) -> TargetFile {
        TargetFile::for_project(&self.root)
    }

    /// Construct the backend selected by the project config
    pub(crate) fn strategy(&self) -> Result<Arc<dyn Strategy>> {
        tm_db::strategy_for(&self.config.database).context("Failed to open backend")
    }
}

/// Reject names that could cause path traversal or confusing file names
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.')
        || name.starts_with('-')
        || name.chars().any(char::is_whitespace)
    {
        anyhow::bail!(
            "Invalid name '{}': must not contain '/', '\\', '..', whitespace, or start with '.' or '-'",
            name
        );
    }
    Ok(())
}
