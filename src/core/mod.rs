//! Core utilities for the MLB roster CLI
//!
//! This module consolidates the plumbing the pipeline is built on:
//! - `clock`: injectable source of the current date
//! - `http`: stats API request headers and client construction

pub mod clock;
pub mod http;

// Re-export commonly used items for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use http::{build_client, json_header_map};
