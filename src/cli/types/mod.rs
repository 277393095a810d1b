//! Type-safe wrappers and enums for MLB stats data.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::RosterFilter;
pub use ids::{TeamId, VenueId};
pub use time::Season;
