//! Source of "today" for season selection.

use chrono::{NaiveDate, Utc};

use crate::cli::types::Season;

/// Supplies the current date.
///
/// Season-scoped lookups read the date through this trait so tests can pin it.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Season the current date falls in.
    fn season(&self) -> Season {
        Season::from_date(self.today())
    }
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock frozen on a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
