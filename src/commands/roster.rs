//! Roster report command implementation

use std::{sync::Arc, time::Duration};

use tracing::debug;

use crate::{
    cli::types::RosterFilter,
    core::{build_client, SystemClock},
    mlb::{http::StatsApiClient, report::ReportOptions, service::RosterService},
    Result,
};

use super::resolve_api_url;

/// Parameters for the roster command.
#[derive(Debug, Clone)]
pub struct RosterParams {
    pub query: String,
    pub api_url: Option<String>,
    pub roster_filter: RosterFilter,
    pub include_venue: bool,
    pub timeout: Option<Duration>,
}

impl RosterParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            api_url: None,
            roster_filter: RosterFilter::Active,
            include_venue: true,
            timeout: None,
        }
    }
}

/// Build a [`RosterService`] against the live stats API (or the configured URL).
pub fn build_service(params: &RosterParams) -> Result<RosterService> {
    let api_url = resolve_api_url(params.api_url.clone())?;
    debug!(%api_url, timeout = ?params.timeout, "building stats API client");

    let gateway = StatsApiClient::new(build_client(params.timeout)?, &api_url)?;
    let options = ReportOptions {
        roster_filter: params.roster_filter,
        include_venue: params.include_venue,
    };
    Ok(RosterService::new(
        Arc::new(gateway),
        Arc::new(SystemClock),
        options,
    ))
}

/// Produce the report text for `params.query`, or "Not Found".
pub async fn build_report(params: &RosterParams) -> Result<String> {
    build_service(params)?.execute(&params.query).await
}

/// Handle the roster command: print the report to stdout.
pub async fn handle_roster(params: RosterParams) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via integration tests
    let report = build_report(&params).await?;

    if report.ends_with('\n') {
        print!("{}", report);
    } else {
        println!("{}", report);
    }

    Ok(())
}
