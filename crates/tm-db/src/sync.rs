//! The synchronizer
//!
//! Computes and executes the minimal ordered set of apply and revert
//! operations that brings the backend's applied-set in line with the target
//! version. This is the only component with non-trivial logic; everything it
//! touches goes through the narrow [`Strategy`] interface.

use crate::error::DbResult;
use crate::traits::Strategy;
use tm_core::{MigrationUnit, Version};

/// What a sync pass executed, in execution order
#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    /// Identifiers applied, ascending
    pub applied: Vec<String>,
    /// Identifiers reverted, descending
    pub reverted: Vec<String>,
    /// Whether applied-set bookkeeping was suppressed
    pub dry_run: bool,
}

impl SyncOutcome {
    /// True when the pass executed nothing (already converged)
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty() && self.reverted.is_empty()
    }
}

/// Progress event emitted once per executed unit, before it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent<'a> {
    Applying(&'a str),
    Reverting(&'a str),
}

/// Orchestrates one synchronization pass over a migration set
pub struct Synchronizer<'a> {
    strategy: &'a dyn Strategy,
}

impl<'a> Synchronizer<'a> {
    pub fn new(strategy: &'a dyn Strategy) -> Self {
        Self { strategy }
    }

    /// Run one sync pass: APPLY ascending, then REVERT descending.
    ///
    /// The unit list is sorted defensively (stable, by version) so discovery
    /// order never matters. Units run strictly sequentially; the first
    /// failure aborts the remainder of the pass. `on_event` fires once per
    /// executed unit as it starts, so the caller can report progress.
    ///
    /// APPLY scans the full list regardless of target: a unit at or below
    /// the target that was never applied (e.g. a file inserted out of
    /// timestamp order) must still be brought up to date. REVERT only runs
    /// when a target is set; with no target the steady state is "everything
    /// applied" and rollback is meaningless.
    pub async fn sync(
        &self,
        units: &[MigrationUnit],
        target: Option<&Version>,
        dry_run: bool,
        mut on_event: impl FnMut(SyncEvent<'_>),
    ) -> DbResult<SyncOutcome> {
        let mut ordered: Vec<&MigrationUnit> = units.iter().collect();
        ordered.sort_by(|a, b| a.version.cmp(&b.version));

        let mut outcome = SyncOutcome {
            dry_run,
            ..Default::default()
        };

        for unit in &ordered {
            if let Some(target) = target {
                if unit.version > *target {
                    continue; // not yet due
                }
            }
            if self.strategy.has_applied(&unit.version).await? {
                continue; // already converged
            }
            let id = unit.version.as_identifier();
            on_event(SyncEvent::Applying(id));
            log::info!("applying {id}");
            self.strategy.run_apply(unit, dry_run).await?;
            outcome.applied.push(id.to_string());
        }

        if let Some(target) = target {
            for unit in ordered.iter().rev() {
                if unit.version <= *target {
                    continue; // at or below target, keep applied
                }
                if !self.strategy.has_applied(&unit.version).await? {
                    continue; // nothing to revert
                }
                let id = unit.version.as_identifier();
                on_event(SyncEvent::Reverting(id));
                log::info!("reverting {id}");
                self.strategy.run_revert(unit, dry_run).await?;
                outcome.reverted.push(id.to_string());
            }
        }

        Ok(outcome)
    }
}

/// Run one full backend session: `init`, a sync pass, then cleanup.
///
/// `end` is attempted exactly once no matter how the session terminated,
/// including an `init` failure, and a cleanup failure never masks the
/// session's own error.
pub async fn sync_session(
    strategy: &dyn Strategy,
    units: &[MigrationUnit],
    target: Option<&Version>,
    dry_run: bool,
    on_event: impl FnMut(SyncEvent<'_>),
) -> DbResult<SyncOutcome> {
    let result = match strategy.init().await {
        Ok(()) => {
            Synchronizer::new(strategy)
                .sync(units, target, dry_run, on_event)
                .await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = strategy.end().await {
        log::warn!("backend cleanup failed: {e}");
    }
    result
}
