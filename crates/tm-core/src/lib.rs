//! tm-core - Core library for Tidemark
//!
//! This crate provides the value types and filesystem collaborators shared by
//! the Tidemark migration tool: timestamp-derived versions, migration units
//! parsed from SQL files, directory discovery, the persisted target pointer,
//! and project configuration.

pub mod config;
pub mod discovery;
pub mod error;
pub mod migration;
pub mod target;
pub mod version;

pub use config::{Config, DatabaseConfig, DbType};
pub use discovery::discover_units;
pub use error::{CoreError, CoreResult};
pub use migration::MigrationUnit;
pub use target::{latest_version, TargetFile};
pub use version::Version;
