//! Set command implementation - update the target version pointer

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, SetArgs};
use crate::commands::common::ProjectContext;

/// Execute the set command
pub(crate) async fn execute(args: &SetArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let units = project.discover()?;

    let version = project
        .target_file()
        .write(&units, &args.version)
        .context("Failed to set target version")?;

    println!("Target set to {version}");
    Ok(())
}
