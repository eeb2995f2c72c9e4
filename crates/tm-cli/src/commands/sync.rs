//! Sync command implementation - converge the backend on the target version

use anyhow::{Context, Result};
use tm_db::{sync_session, SyncEvent};

use crate::cli::{GlobalArgs, SyncArgs};
use crate::commands::common::ProjectContext;

/// Execute the sync command
pub(crate) async fn execute(args: &SyncArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let units = project.discover()?;
    let target = project
        .target_file()
        .read()
        .context("Failed to read target pointer")?;

    let strategy = project.strategy()?;

    if global.verbose {
        eprintln!(
            "[verbose] Syncing {} migrations against {} backend (target: {})",
            units.len(),
            strategy.backend_type(),
            target
                .as_ref()
                .map(|v| v.as_identifier().to_string())
                .unwrap_or_else(|| "latest".to_string()),
        );
    }

    let outcome = sync_session(
        strategy.as_ref(),
        &units,
        target.as_ref(),
        args.dry_run,
        |event| match event {
            SyncEvent::Applying(id) => println!("Applying {id}"),
            SyncEvent::Reverting(id) => println!("Reverting {id}"),
        },
    )
    .await
    .context("Sync aborted")?;

    if outcome.is_noop() {
        println!("Already up to date");
    } else {
        println!(
            "Applied {}, reverted {}{}",
            outcome.applied.len(),
            outcome.reverted.len(),
            if outcome.dry_run { " (dry run)" } else { "" },
        );
    }

    Ok(())
}
