//! Error types for tm-core

use thiserror::Error;

/// Core error type for Tidemark
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Version string cannot be decoded
    #[error("[M001] Malformed version '{raw}': {reason}")]
    MalformedVersion { raw: String, reason: String },

    /// M002: Target version does not match any known migration
    #[error("[M002] Unknown version '{version}': no migration with this version exists")]
    UnknownVersion { version: String },

    /// M003: Version offset beyond available history
    #[error("[M003] Offset {offset} is out of range: there are only {count} migrations")]
    OutOfRange { offset: usize, count: usize },

    /// M004: No migrations exist yet
    #[error("[M004] No migrations exist yet")]
    NoMigrations,

    /// M005: Migration file cannot be parsed
    #[error("[M005] Failed to parse migration {path}: {message}")]
    MigrationParseError { path: String, message: String },

    /// M006: Configuration file not found
    #[error("[M006] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// M007: Failed to parse configuration file
    #[error("[M007] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// M008: IO error
    #[error("[M008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// M009: YAML parse error
    #[error("[M009] YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
