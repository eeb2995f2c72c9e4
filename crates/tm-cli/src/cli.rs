//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Tidemark - timestamp-versioned SQL migrations
#[derive(Parser, Debug)]
#[command(name = "tidemark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Tidemark project
    Init(InitArgs),

    /// Create a new timestamped migration and advance the target
    Create(CreateArgs),

    /// Apply and revert migrations to converge on the target version
    Sync(SyncArgs),

    /// Print the latest (or Nth-previous) known version
    Version(VersionArgs),

    /// Set the target version pointer
    Set(SetArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name (also the directory to create)
    pub name: String,

    /// Database file path written into the generated config
    #[arg(long, default_value = "./dev.duckdb")]
    pub database_path: String,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Migration name (becomes the version's suffix)
    pub name: String,
}

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Run migration side effects without recording applied-set changes
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

/// Arguments for the version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Count back from the latest version (0 = latest)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub offset: usize,
}

/// Arguments for the set command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Full version identifier (or bare 14-digit timestamp)
    pub version: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
