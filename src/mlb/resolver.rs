//! Query → team resolution.
//!
//! A numeric query is treated as a team id and looked up directly; anything
//! else is matched case-insensitively against the names of the season's
//! active teams. Only a unique active match resolves.

use tracing::{debug, warn};

use crate::{
    cli::types::TeamId,
    core::Clock,
    mlb::{http::StatsGateway, types::Team},
    Result,
};

/// A raw team query, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamQuery {
    Id(TeamId),
    /// An integer no team can carry (negative or too large).
    InvalidId(String),
    Name(String),
}

impl TeamQuery {
    /// Queries that are fully an integer (optional sign, then digits) are ids;
    /// everything else is a name fragment.
    pub fn parse(query: &str) -> Self {
        let digits = query.strip_prefix(['+', '-']).unwrap_or(query);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return TeamQuery::Name(query.to_string());
        }
        match query.parse::<TeamId>() {
            Ok(id) => TeamQuery::Id(id),
            Err(_) => TeamQuery::InvalidId(query.to_string()),
        }
    }
}

/// Outcome of resolving a query.
///
/// `NotFound` and `Ambiguous` look the same to callers of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(Team),
    NotFound,
    /// More than one active team matched; holds the matching names.
    Ambiguous(Vec<String>),
}

impl Resolution {
    pub fn team(&self) -> Option<&Team> {
        match self {
            Resolution::Resolved(team) => Some(team),
            _ => None,
        }
    }

    pub fn into_team(self) -> Option<Team> {
        match self {
            Resolution::Resolved(team) => Some(team),
            _ => None,
        }
    }
}

/// Resolve `query` to a single active team.
///
/// Gateway failures propagate; they are never downgraded to `NotFound`.
pub async fn resolve_team(
    gateway: &dyn StatsGateway,
    clock: &dyn Clock,
    query: &str,
) -> Result<Resolution> {
    match TeamQuery::parse(query) {
        TeamQuery::Id(team_id) => resolve_by_id(gateway, clock, team_id).await,
        TeamQuery::InvalidId(raw) => {
            debug!(query = %raw, "integer query is not a valid team id");
            Ok(Resolution::NotFound)
        }
        TeamQuery::Name(name) => resolve_by_name(gateway, clock, &name).await,
    }
}

async fn resolve_by_id(
    gateway: &dyn StatsGateway,
    clock: &dyn Clock,
    team_id: TeamId,
) -> Result<Resolution> {
    if team_id.is_commissioner() {
        debug!(%team_id, "id belongs to the commissioner's office, not a team");
        return Ok(Resolution::NotFound);
    }

    let teams = gateway.team_by_id(team_id, clock.season()).await?;
    Ok(teams
        .into_iter()
        .find(|t| t.active)
        .map_or(Resolution::NotFound, Resolution::Resolved))
}

async fn resolve_by_name(
    gateway: &dyn StatsGateway,
    clock: &dyn Clock,
    name: &str,
) -> Result<Resolution> {
    let season = clock.season();
    let teams = gateway.teams(season).await?;
    debug!(%season, teams = teams.len(), "searching teams by name");
    Ok(match_team_name(teams, name))
}

/// Pick the unique active team whose name contains `query`, ignoring case.
pub fn match_team_name(teams: Vec<Team>, query: &str) -> Resolution {
    let needle = query.to_lowercase();
    let mut matches: Vec<Team> = teams
        .into_iter()
        .filter(|t| t.active && t.name.to_lowercase().contains(&needle))
        .collect();

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Resolved(matches.remove(0)),
        _ => {
            let names: Vec<String> = matches.into_iter().map(|t| t.name).collect();
            warn!(
                query,
                matches = ?names,
                "multiple teams matched; ambiguous match results in no team"
            );
            Resolution::Ambiguous(names)
        }
    }
}
