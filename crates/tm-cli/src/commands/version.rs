//! Version command implementation - report the latest known version

use anyhow::Result;
use tm_core::latest_version;

use crate::cli::{GlobalArgs, VersionArgs};
use crate::commands::common::ProjectContext;

/// Execute the version command
pub(crate) async fn execute(args: &VersionArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let units = project.discover()?;
    let version = latest_version(&units, args.offset)?;
    println!("{version}");
    Ok(())
}
