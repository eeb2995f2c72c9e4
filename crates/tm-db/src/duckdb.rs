//! DuckDB-backed strategy
//!
//! Runs migration SQL against a DuckDB database and tracks the applied-set
//! in a `schema_migrations` table alongside the migrated objects.

use crate::error::{DbError, DbResult};
use crate::traits::Strategy;
use async_trait::async_trait;
use duckdb::Connection;
use std::path::Path;
use std::sync::Mutex;
use tm_core::{MigrationUnit, Version};

const TRACKING_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version    VARCHAR UNIQUE NOT NULL,
    applied_at TIMESTAMP NOT NULL DEFAULT now()
)";

const DUCKDB_TEMPLATE: &str = "-- tidemark:up\n\n\n-- tidemark:down\n\n";

/// DuckDB persistence strategy
pub struct DuckDbStrategy {
    conn: Mutex<Connection>,
}

impl DuckDbStrategy {
    /// Open an in-memory DuckDB database
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a DuckDB database file
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open from a path string (handles the `:memory:` special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Execute a unit's SQL synchronously
    fn execute_unit_sql(&self, sql: &str, identifier: &str) -> DbResult<()> {
        if sql.is_empty() {
            return Ok(());
        }
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(format!("{identifier}: {e}")))
    }

    fn has_applied_sync(&self, identifier: &str) -> DbResult<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM schema_migrations WHERE version = ?",
                duckdb::params![identifier],
                |row| row.get(0),
            )
            .map_err(|e| DbError::TrackingError(e.to_string()))?;
        Ok(count > 0)
    }

    fn record_applied_sync(&self, identifier: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO schema_migrations (version) VALUES (?)",
            duckdb::params![identifier],
        )
        .map_err(|e| DbError::TrackingError(format!("failed to record {identifier}: {e}")))?;
        Ok(())
    }

    fn erase_applied_sync(&self, identifier: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM schema_migrations WHERE version = ?",
            duckdb::params![identifier],
        )
        .map_err(|e| DbError::TrackingError(format!("failed to erase {identifier}: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl Strategy for DuckDbStrategy {
    async fn init(&self) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(TRACKING_TABLE_DDL).map_err(|e| {
            DbError::ConnectionError(format!("failed to create schema_migrations table: {e}"))
        })
    }

    async fn has_applied(&self, version: &Version) -> DbResult<bool> {
        self.has_applied_sync(version.as_identifier())
    }

    async fn run_apply(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()> {
        let id = unit.version.as_identifier();
        self.execute_unit_sql(&unit.up_sql, id)?;
        if !dry_run {
            self.record_applied_sync(id)?;
        }
        Ok(())
    }

    async fn run_revert(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()> {
        let id = unit.version.as_identifier();
        self.execute_unit_sql(&unit.down_sql, id)?;
        if !dry_run {
            self.erase_applied_sync(id)?;
        }
        Ok(())
    }

    async fn end(&self) -> DbResult<()> {
        // The connection closes when the strategy is dropped
        log::debug!("closing duckdb backend");
        Ok(())
    }

    fn template(&self) -> &'static str {
        DUCKDB_TEMPLATE
    }

    fn backend_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unit(id: &str, up_sql: &str, down_sql: &str) -> MigrationUnit {
        let version = Version::parse(id).unwrap();
        MigrationUnit {
            name: version.name().to_string(),
            version,
            up_sql: up_sql.to_string(),
            down_sql: down_sql.to_string(),
            path: PathBuf::from(format!("{id}.sql")),
        }
    }

    #[tokio::test]
    async fn test_init_creates_tracking_table() {
        let strategy = DuckDbStrategy::in_memory().unwrap();
        strategy.init().await.unwrap();
        // Idempotent
        strategy.init().await.unwrap();
        assert_eq!(strategy.backend_type(), "duckdb");
    }

    #[tokio::test]
    async fn test_apply_executes_sql_and_records() {
        let strategy = DuckDbStrategy::in_memory().unwrap();
        strategy.init().await.unwrap();
        let u = unit(
            "20240101000000-users",
            "CREATE TABLE users (id INTEGER);",
            "DROP TABLE users;",
        );

        strategy.run_apply(&u, false).await.unwrap();
        assert!(strategy.has_applied(&u.version).await.unwrap());

        // The side effect is visible
        let conn = strategy.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_revert_executes_sql_and_erases() {
        let strategy = DuckDbStrategy::in_memory().unwrap();
        strategy.init().await.unwrap();
        let u = unit(
            "20240101000000-users",
            "CREATE TABLE users (id INTEGER);",
            "DROP TABLE users;",
        );

        strategy.run_apply(&u, false).await.unwrap();
        strategy.run_revert(&u, false).await.unwrap();
        assert!(!strategy.has_applied(&u.version).await.unwrap());
    }

    #[tokio::test]
    async fn test_dry_run_executes_without_bookkeeping() {
        let strategy = DuckDbStrategy::in_memory().unwrap();
        strategy.init().await.unwrap();
        let u = unit(
            "20240101000000-users",
            "CREATE TABLE users (id INTEGER);",
            "DROP TABLE users;",
        );

        strategy.run_apply(&u, true).await.unwrap();
        // Side effect happened, applied-set unchanged
        assert!(!strategy.has_applied(&u.version).await.unwrap());
        let exists: i64 = {
            let conn = strategy.conn.lock().unwrap();
            conn.query_row(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'users'",
                [],
                |row| row.get(0),
            )
            .unwrap()
        };
        assert_eq!(exists, 1);
    }

    #[tokio::test]
    async fn test_invalid_sql_is_an_execution_error() {
        let strategy = DuckDbStrategy::in_memory().unwrap();
        strategy.init().await.unwrap();
        let u = unit("20240101000000-bad", "NOT VALID SQL;", "");

        let err = strategy.run_apply(&u, false).await.unwrap_err();
        assert!(matches!(err, DbError::ExecutionError(_)));
        assert!(!strategy.has_applied(&u.version).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_backed_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.duckdb");
        let u = unit(
            "20240101000000-users",
            "CREATE TABLE users (id INTEGER);",
            "DROP TABLE users;",
        );

        {
            let strategy = DuckDbStrategy::from_path(&db_path).unwrap();
            strategy.init().await.unwrap();
            strategy.run_apply(&u, false).await.unwrap();
            strategy.end().await.unwrap();
        }

        let strategy = DuckDbStrategy::from_path(&db_path).unwrap();
        strategy.init().await.unwrap();
        assert!(strategy.has_applied(&u.version).await.unwrap());
    }
}
