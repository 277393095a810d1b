//! Error types for the MLB roster CLI

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

/// Stats API resource a request was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Single team lookup by id.
    Team,
    /// Season-wide team search.
    Teams,
    Roster,
    Venue,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resource::Team => "team",
            Resource::Teams => "teams",
            Resource::Roster => "roster",
            Resource::Venue => "venue",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed {resource} response for {id}: {source}")]
    Decode {
        resource: Resource,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid stats API URL {url}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Unexpected status looking up {resource} {id}: {status}")]
    Gateway {
        resource: Resource,
        id: String,
        status: StatusCode,
    },
}

impl RosterError {
    /// HTTP status observed by the gateway, if this is a gateway failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RosterError::Gateway { status, .. } => Some(*status),
            RosterError::Http(err) => err.status(),
            _ => None,
        }
    }
}
