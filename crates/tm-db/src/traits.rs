//! Persistence strategy trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use tm_core::{MigrationUnit, Version};

/// Pluggable persistence backend for Tidemark
///
/// Implementations must be Send + Sync for async operation. The synchronizer
/// never inspects a backend beyond this interface; the applied-set is owned
/// entirely by the implementation.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Establish readiness: ensure the tracking store exists.
    ///
    /// Called exactly once per invocation, before any other call.
    async fn init(&self) -> DbResult<()>;

    /// Whether this version is currently recorded as applied.
    ///
    /// Pure query; must reflect record/erase calls made earlier in the
    /// same session.
    async fn has_applied(&self, version: &Version) -> DbResult<bool>;

    /// Execute the unit's forward operation.
    ///
    /// When `dry_run` is false, also durably records the version as applied.
    /// When true, the side effect still runs but the applied-set is left
    /// unchanged, so a later real run reconsiders the unit as pending.
    async fn run_apply(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()>;

    /// Execute the unit's backward operation, erasing the applied marker
    /// unless `dry_run` is set
    async fn run_revert(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()>;

    /// Release held resources.
    ///
    /// Called exactly once, after the command completes or fails
    /// (best-effort cleanup).
    async fn end(&self) -> DbResult<()>;

    /// Boilerplate content for newly scaffolded migration files
    fn template(&self) -> &'static str;

    /// Backend identifier for logging
    fn backend_type(&self) -> &'static str;
}
