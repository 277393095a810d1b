//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::RosterFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "mlb-roster",
    about = "Print an MLB team's roster as CSV",
    long_about = "Looks up a team by id (e.g. 137) or by part of its name (e.g. giants), \
                  then prints its roster and home stadium as CSV. Prints \"Not Found\" \
                  when the query does not identify exactly one active team."
)]
pub struct Cli {
    /// Team id or search query.
    #[clap(long, short)]
    pub team: String,

    /// Stats API base URL (or set `MLB_STATS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Which roster entries to report.
    #[clap(long, value_enum, default_value_t = RosterFilter::Active)]
    pub roster_filter: RosterFilter,

    /// Skip the venue lookup and the Home Stadium column.
    #[clap(long)]
    pub no_venue: bool,

    /// Per-request timeout in seconds (default: none).
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Log requests and pipeline steps to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}
