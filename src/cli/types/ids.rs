//! ID types for MLB stats API entities.

use crate::error::{Result, RosterError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Team identifier excluded from resolution.
///
/// The stats API answers id 11 with a team-shaped record for the
/// "Office of the Commissioner".
pub const COMMISSIONER_TEAM_ID: TeamId = TeamId(11);

/// Type-safe wrapper for MLB team IDs.
///
/// # Examples
///
/// ```rust
/// use mlb_roster::TeamId;
///
/// let team_id = TeamId::new(137);
/// assert_eq!(team_id.as_u32(), 137);
/// assert_eq!(team_id.to_string(), "137");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether this id names the commissioner's office rather than a club.
    pub fn is_commissioner(&self) -> bool {
        *self == COMMISSIONER_TEAM_ID
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for venue IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct VenueId(pub u32);

impl VenueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
