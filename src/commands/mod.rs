//! Command implementations for the MLB roster CLI

pub mod roster;

use crate::{mlb::http::STATS_API_URL, Result, API_URL_ENV_VAR};

/// Resolve the stats API base URL from the CLI option, `MLB_STATS_API_URL`, or the public default.
///
/// The result is validated as an absolute http(s) URL.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    let url = api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| STATS_API_URL.to_string());
    crate::mlb::http::parse_api_url(&url)?;
    Ok(url)
}
