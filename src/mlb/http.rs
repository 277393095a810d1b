//! Stats API gateway: the trait the pipeline consumes and its reqwest implementation.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    cli::types::{Season, TeamId, VenueId},
    error::{Resource, RosterError},
    mlb::types::{RosterEntry, RosterEnvelope, Team, TeamsEnvelope, Venue, VenuesEnvelope},
    Result,
};


/// Public MLB stats API.
pub const STATS_API_URL: &str = "https://statsapi.mlb.com";

/// `sportIds` value for Major League Baseball.
pub const MLB_SPORT_ID: u32 = 1;

/// Remote team, roster and venue lookups.
///
/// Lookups whose resource may legitimately be missing (`team_by_id`, `venue`)
/// return an empty list for "absent"; every other non-success status is an error.
#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// Teams recorded under `team_id` for `season`.
    async fn team_by_id(&self, team_id: TeamId, season: Season) -> Result<Vec<Team>>;

    /// All major league teams for `season`.
    async fn teams(&self, season: Season) -> Result<Vec<Team>>;

    /// Roster of `team_id`, in the order the API lists it.
    async fn roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>>;

    /// Venue records for `venue_id`; the API answers with a list even though it is id-keyed.
    async fn venue(&self, venue_id: VenueId) -> Result<Vec<Venue>>;
}

/// Validate a stats API base URL: absolute, http or https.
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| RosterError::InvalidApiUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RosterError::InvalidApiUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

/// [`StatsGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    /// `client` should come from [`build_client`](crate::core::build_client),
    /// which carries the JSON request headers as defaults.
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let url = parse_api_url(base_url)?;
        Ok(Self {
            client,
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .client
            .get(&url)
            .query(query)
            .build()?;

        debug!(method = %request.method(), url = %request.url(), "stats API request");
        let response = self.client.execute(request).await?;
        debug!(status = %response.status(), url = %response.url(), "stats API response");

        Ok(response)
    }

    fn season_query(season: Season) -> Vec<(&'static str, String)> {
        vec![
            ("season", season.to_string()),
            ("sportIds", MLB_SPORT_ID.to_string()),
        ]
    }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    resource: Resource,
    id: impl ToString,
) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| RosterError::Decode {
        resource,
        id: id.to_string(),
        source,
    })
}

fn gateway_error(resource: Resource, id: impl ToString, status: StatusCode) -> RosterError {
    RosterError::Gateway {
        resource,
        id: id.to_string(),
        status,
    }
}

#[async_trait]
impl StatsGateway for StatsApiClient {
    async fn team_by_id(&self, team_id: TeamId, season: Season) -> Result<Vec<Team>> {
        let mut query = Self::season_query(season);
        query.push(("teamId", team_id.to_string()));

        let response = self.get("/api/v1/teams", &query).await?;
        match response.status() {
            StatusCode::OK => Ok(decode::<TeamsEnvelope>(response, Resource::Team, team_id)
                .await?
                .teams),
            StatusCode::NOT_FOUND => {
                warn!(%team_id, "could not find team");
                Ok(Vec::new())
            }
            status => Err(gateway_error(Resource::Team, team_id, status)),
        }
    }

    async fn teams(&self, season: Season) -> Result<Vec<Team>> {
        let response = self
            .get("/api/v1/teams", &Self::season_query(season))
            .await?;
        match response.status() {
            StatusCode::OK => Ok(
                decode::<TeamsEnvelope>(response, Resource::Teams, format!("season {season}"))
                    .await?
                    .teams,
            ),
            status => Err(gateway_error(
                Resource::Teams,
                format!("season {season}"),
                status,
            )),
        }
    }

    async fn roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>> {
        let path = format!("/api/v1/teams/{team_id}/roster");
        let response = self.get(&path, &[]).await?;
        match response.status() {
            StatusCode::OK => Ok(decode::<RosterEnvelope>(response, Resource::Roster, team_id)
                .await?
                .roster),
            status => Err(gateway_error(Resource::Roster, team_id, status)),
        }
    }

    async fn venue(&self, venue_id: VenueId) -> Result<Vec<Venue>> {
        let path = format!("/api/v1/venues/{venue_id}");
        let response = self.get(&path, &[]).await?;
        match response.status() {
            StatusCode::OK => Ok(decode::<VenuesEnvelope>(response, Resource::Venue, venue_id)
                .await?
                .venues),
            StatusCode::NOT_FOUND => {
                debug!(%venue_id, "venue lookup returned 404");
                Ok(Vec::new())
            }
            status => Err(gateway_error(Resource::Venue, venue_id, status)),
        }
    }
}
