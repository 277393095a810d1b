//! Entry point: parse CLI, set up logging, and run the roster command.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mlb_roster::{
    cli::Cli,
    commands::roster::{handle_roster, RosterParams},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = RosterParams {
        query: cli.team.clone(),
        api_url: cli.api_url,
        roster_filter: cli.roster_filter,
        include_venue: !cli.no_venue,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };

    handle_roster(params)
        .await
        .with_context(|| format!("failed to build roster report for {:?}", cli.team))?;

    Ok(())
}
