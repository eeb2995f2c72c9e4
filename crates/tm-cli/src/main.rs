//! Tidemark CLI - timestamp-versioned SQL migrations

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{create, init, set, sync, version};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Init(args) => init::execute(args).await,
        cli::Commands::Create(args) => create::execute(args, &cli.global).await,
        cli::Commands::Sync(args) => sync::execute(args, &cli.global).await,
        cli::Commands::Version(args) => version::execute(args, &cli.global).await,
        cli::Commands::Set(args) => set::execute(args, &cli.global).await,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
