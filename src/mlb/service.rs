//! The roster pipeline: resolve a query, fetch the team's details, render the report.

use std::sync::Arc;

use tracing::info;

use crate::{
    core::Clock,
    mlb::{
        fetcher::fetch_details,
        http::StatsGateway,
        report::{render, ReportOptions},
        resolver::{resolve_team, Resolution},
    },
    Result,
};

/// Result text when a query does not resolve to exactly one team.
pub const NOT_FOUND: &str = "Not Found";

/// Turns team queries into roster reports.
///
/// Holds no per-query state; one service can serve any number of `execute` calls.
#[derive(Clone)]
pub struct RosterService {
    gateway: Arc<dyn StatsGateway>,
    clock: Arc<dyn Clock>,
    options: ReportOptions,
}

impl RosterService {
    pub fn new(gateway: Arc<dyn StatsGateway>, clock: Arc<dyn Clock>, options: ReportOptions) -> Self {
        Self {
            gateway,
            clock,
            options,
        }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Resolve `query` without fetching anything else.
    pub async fn resolve(&self, query: &str) -> Result<Resolution> {
        resolve_team(self.gateway.as_ref(), self.clock.as_ref(), query).await
    }

    /// Produce the roster report for `query`, or [`NOT_FOUND`].
    ///
    /// Gateway failures from any stage are returned unchanged.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let team = match self.resolve(query).await? {
            Resolution::Resolved(team) => team,
            Resolution::NotFound => {
                info!(query, "no team matched");
                return Ok(NOT_FOUND.to_string());
            }
            Resolution::Ambiguous(matches) => {
                info!(query, matches = matches.len(), "query matched more than one team");
                return Ok(NOT_FOUND.to_string());
            }
        };

        info!(team_id = %team.id, team = %team.name, "resolved team");
        let details = fetch_details(
            self.gateway.as_ref(),
            &team,
            self.options.include_venue,
        )
        .await?;

        render(
            &team,
            &details.roster,
            details.venue.as_ref(),
            &self.options,
        )
    }
}
