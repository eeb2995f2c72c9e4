//! Configuration types and parsing for tidemark.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name, relative to the project root
pub const CONFIG_FILE: &str = "tidemark.yml";

/// Project configuration from tidemark.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Directory containing migration SQL files
    #[serde(default = "default_migration_path")]
    pub migration_path: String,

    /// Backend connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Backend kind
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database file path (duckdb only; ":memory:" supported)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

/// Supported persistence backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// In-memory applied-set, nothing durable (test double)
    #[default]
    Memory,
    /// DuckDB database file
    Duckdb,
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbType::Memory => write!(f, "memory"),
            DbType::Duckdb => write!(f, "duckdb"),
        }
    }
}

impl Config {
    /// Load configuration from `<project_dir>/tidemark.yml`
    pub fn load(project_dir: &Path) -> CoreResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Absolute migrations directory for a project root
    pub fn migration_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.migration_path)
    }
}

fn default_migration_path() -> String {
    "migrations".to_string()
}

fn default_db_path() -> String {
    ":memory:".to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
