//! Filter types for roster report rendering.

use std::fmt;

/// Which roster entries make it into the report.
///
/// Some stats API rosters list injured or optioned players alongside the
/// active ones. `Active` keeps only entries whose status description is
/// exactly `"Active"`; `All` renders every entry the roster returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RosterFilter {
    /// Players whose status is "Active"
    #[default]
    Active,
    /// Every player on the roster, regardless of status
    All,
}

/// Status description the stats API gives to active roster entries.
pub const ACTIVE_STATUS: &str = "Active";

impl RosterFilter {
    /// Whether an entry with the given status description passes this filter.
    pub fn admits(&self, status_description: &str) -> bool {
        match self {
            RosterFilter::Active => status_description == ACTIVE_STATUS,
            RosterFilter::All => true,
        }
    }
}

impl fmt::Display for RosterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RosterFilter::Active => "active",
            RosterFilter::All => "all",
        };
        write!(f, "{}", s)
    }
}
