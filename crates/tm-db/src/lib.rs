//! tm-db - Persistence strategies and the synchronizer for Tidemark
//!
//! This crate provides the `Strategy` trait, its in-memory and DuckDB
//! implementations, and the `Synchronizer` that converges the applied set
//! toward a target version.

pub mod duckdb;
pub mod error;
pub mod memory;
pub mod sync;
pub mod traits;

use std::sync::Arc;
use tm_core::{DatabaseConfig, DbType};

pub use duckdb::DuckDbStrategy;
pub use error::{DbError, DbResult};
pub use memory::{ExecutedOp, MemoryStrategy};
pub use sync::{sync_session, SyncEvent, SyncOutcome, Synchronizer};
pub use traits::Strategy;

/// Construct the strategy selected by a project's database configuration
pub fn strategy_for(config: &DatabaseConfig) -> DbResult<Arc<dyn Strategy>> {
    let strategy: Arc<dyn Strategy> = match config.db_type {
        DbType::Memory => Arc::new(MemoryStrategy::new()),
        DbType::Duckdb => Arc::new(DuckDbStrategy::new(&config.path)?),
    };
    Ok(strategy)
}
