//! In-memory strategy
//!
//! Tracks the applied-set in process memory and journals every execution,
//! so tests can assert exact call order. Nothing is durable; this is the
//! test double and the default backend for freshly scaffolded projects.

use crate::error::{DbError, DbResult};
use crate::traits::Strategy;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Mutex;
use tm_core::{MigrationUnit, Version};

const MEMORY_TEMPLATE: &str = "-- tidemark:up\n\n\n-- tidemark:down\n\n";

/// One recorded execution, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutedOp {
    /// The unit's up SQL was executed
    Apply(String),
    /// The unit's down SQL was executed
    Revert(String),
}

#[derive(Debug, Default)]
struct MemoryState {
    applied: BTreeSet<String>,
    journal: Vec<ExecutedOp>,
    fail_on: Option<String>,
    fail_init: bool,
    end_calls: usize,
}

/// In-memory persistence strategy
#[derive(Debug, Default)]
pub struct MemoryStrategy {
    state: Mutex<MemoryState>,
}

impl MemoryStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make apply/revert of this identifier fail, for fail-fast tests
    pub fn fail_on(&self, identifier: &str) {
        self.state.lock().unwrap().fail_on = Some(identifier.to_string());
    }

    /// Make `init` fail, for cleanup-contract tests
    pub fn fail_on_init(&self) {
        self.state.lock().unwrap().fail_init = true;
    }

    /// How many times `end` has been called
    pub fn end_count(&self) -> usize {
        self.state.lock().unwrap().end_calls
    }

    /// Identifiers currently recorded as applied, ascending
    pub fn applied_versions(&self) -> Vec<String> {
        self.state.lock().unwrap().applied.iter().cloned().collect()
    }

    /// Every up/down execution so far, in call order
    pub fn journal(&self) -> Vec<ExecutedOp> {
        self.state.lock().unwrap().journal.clone()
    }

    fn check_injected_failure(state: &MemoryState, identifier: &str) -> DbResult<()> {
        if state.fail_on.as_deref() == Some(identifier) {
            return Err(DbError::ExecutionError(format!(
                "injected failure for {identifier}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Strategy for MemoryStrategy {
    async fn init(&self) -> DbResult<()> {
        if self.state.lock().unwrap().fail_init {
            return Err(DbError::ConnectionError(
                "injected init failure".to_string(),
            ));
        }
        Ok(())
    }

    async fn has_applied(&self, version: &Version) -> DbResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.applied.contains(version.as_identifier()))
    }

    async fn run_apply(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()> {
        let mut state = self.state.lock().unwrap();
        let id = unit.version.as_identifier();
        Self::check_injected_failure(&state, id)?;

        state.journal.push(ExecutedOp::Apply(id.to_string()));
        if !dry_run {
            state.applied.insert(id.to_string());
        }
        Ok(())
    }

    async fn run_revert(&self, unit: &MigrationUnit, dry_run: bool) -> DbResult<()> {
        let mut state = self.state.lock().unwrap();
        let id = unit.version.as_identifier();
        Self::check_injected_failure(&state, id)?;

        state.journal.push(ExecutedOp::Revert(id.to_string()));
        if !dry_run {
            state.applied.remove(id);
        }
        Ok(())
    }

    async fn end(&self) -> DbResult<()> {
        self.state.lock().unwrap().end_calls += 1;
        Ok(())
    }

    fn template(&self) -> &'static str {
        MEMORY_TEMPLATE
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
