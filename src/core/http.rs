//! HTTP utilities for stats API communication

use std::time::Duration;

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA},
    Client,
};

/// User agent sent with every stats API request.
pub const USER_AGENT: &str = concat!("mlb-roster/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every stats API request.
///
/// Responses are requested as JSON and intermediaries are asked not to cache.
pub fn json_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    h.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    h
}

/// Build the reqwest client used to talk to the stats API.
///
/// `timeout` bounds each whole request; `None` leaves reqwest's default (no timeout).
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(json_header_map());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
