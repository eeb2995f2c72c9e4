//! Create command implementation - scaffolds a new timestamped migration

use anyhow::{Context, Result};
use std::fs;
use tm_core::Version;

use crate::cli::{CreateArgs, GlobalArgs};
use crate::commands::common::{validate_name, ProjectContext};

/// Execute the create command
pub(crate) async fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    validate_name(&args.name)?;

    let project = ProjectContext::load(global)?;
    let strategy = project.strategy()?;

    let version = Version::now(&args.name).context("Invalid migration name")?;

    let dir = project.migration_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let file_path = dir.join(format!("{}.sql", version.as_identifier()));
    fs::write(&file_path, strategy.template())
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    // New migrations auto-advance the target to themselves
    project
        .target_file()
        .advance(&version)
        .context("Failed to update target pointer")?;

    println!("Created {}", file_path.display());
    Ok(())
}
