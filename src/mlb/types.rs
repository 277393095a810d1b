use crate::cli::types::{TeamId, VenueId};
use serde::Deserialize;


/// `{ "id": ... }` reference to another resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VenueRef {
    pub id: VenueId,
}

/// Team record from `/api/v1/teams`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub active: bool,
    pub name: String,
    pub venue: VenueRef,
    #[serde(rename = "locationName", default)]
    pub location_name: Option<String>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
}

impl Team {
    pub fn venue_id(&self) -> VenueId {
        self.venue.id
    }
}

/// Envelope for both team lookup and team search
#[derive(Debug, Default, Deserialize)]
pub struct TeamsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerPosition {
    pub abbreviation: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub position_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlayerStatus {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// One player on a team roster
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub person: Person,
    /// Kept as given; jersey "04" stays "04".
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: String,
    pub position: PlayerPosition,
    #[serde(default)]
    pub status: PlayerStatus,
}

impl RosterEntry {
    pub fn person_name(&self) -> &str {
        &self.person.full_name
    }

    pub fn position_abbreviation(&self) -> &str {
        &self.position.abbreviation
    }

    pub fn status_description(&self) -> &str {
        &self.status.description
    }
}

/// Envelope for `/api/v1/teams/{id}/roster`
#[derive(Debug, Default, Deserialize)]
pub struct RosterEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roster: Vec<RosterEntry>,
}

/// Venue record from `/api/v1/venues/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

/// Envelope for `/api/v1/venues/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct VenuesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub venues: Vec<Venue>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<Vec<T>> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
