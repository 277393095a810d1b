//! Roster and venue retrieval for a resolved team.

use tracing::{debug, warn};

use crate::{
    cli::types::VenueId,
    mlb::{
        http::StatsGateway,
        types::{RosterEntry, Team, Venue},
    },
    Result,
};

/// Dependent resources of a resolved team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetails {
    pub roster: Vec<RosterEntry>,
    /// `None` when the venue is absent or inactive, or was not requested.
    pub venue: Option<Venue>,
}

/// Fetch the roster and, when `include_venue` is set, the home venue of `team`.
///
/// Both requests run concurrently and are awaited to completion; neither is
/// cancelled when the other fails. A roster failure is reported ahead of a
/// venue failure.
pub async fn fetch_details(
    gateway: &dyn StatsGateway,
    team: &Team,
    include_venue: bool,
) -> Result<TeamDetails> {
    let venue_id = team.venue_id();
    let venue_fut = async {
        if include_venue {
            fetch_venue(gateway, venue_id).await
        } else {
            Ok(None)
        }
    };

    let (roster, venue) = tokio::join!(gateway.roster(team.id), venue_fut);
    let roster = roster?;
    let venue = venue?;

    debug!(
        team_id = %team.id,
        players = roster.len(),
        venue = venue.as_ref().map(|v| v.name.as_str()),
        "fetched team details"
    );

    Ok(TeamDetails { roster, venue })
}

/// The first active venue recorded under `venue_id`, if any.
pub async fn fetch_venue(gateway: &dyn StatsGateway, venue_id: VenueId) -> Result<Option<Venue>> {
    let venues = gateway.venue(venue_id).await?;
    let venue = venues
        .into_iter()
        .find(|v| v.active && v.id == venue_id);
    if venue.is_none() {
        warn!(%venue_id, "no active venue found; report will omit the stadium name");
    }
    Ok(venue)
}
