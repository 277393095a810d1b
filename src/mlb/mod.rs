//! MLB stats API integration and the roster report pipeline.

pub mod fetcher;
pub mod http;
pub mod report;
pub mod resolver;
pub mod service;
pub mod types;
