//! MLB Roster CLI Library
//!
//! Resolves a team query (an id such as `137` or a name fragment such as
//! `giants`) against the MLB stats API, fetches the team's roster and home
//! venue concurrently, and renders the result as CSV.
//!
//! ## Features
//!
//! - **Team Resolution**: numeric ids are looked up directly; names are matched
//!   case-insensitively against the current season's active teams
//! - **Ambiguity Policy**: zero or several matches both yield "Not Found"
//! - **Concurrent Fetching**: roster and venue requests run side by side
//! - **Deterministic Output**: identical gateway data renders byte-identical CSV
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_roster::commands::roster::{build_report, RosterParams};
//!
//! # async fn example() -> mlb_roster::Result<()> {
//! let report = build_report(&RosterParams::new("giants")).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at another stats API deployment:
//! ```bash
//! export MLB_STATS_API_URL=http://localhost:8080
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod mlb;

// Re-export commonly used types
pub use cli::types::{RosterFilter, Season, TeamId, VenueId};
pub use error::{Result, RosterError};
pub use mlb::{
    report::ReportOptions,
    resolver::Resolution,
    service::{RosterService, NOT_FOUND},
};

pub const API_URL_ENV_VAR: &str = "MLB_STATS_API_URL";
