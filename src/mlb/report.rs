//! CSV roster report.

use crate::{
    cli::types::RosterFilter,
    mlb::types::{RosterEntry, Team, Venue},
    Result,
};

/// Header without the stadium column.
pub const BASE_HEADER: [&str; 4] = ["Team", "Jersey", "Name", "Position"];

/// Header of the stadium column.
pub const VENUE_HEADER: &str = "Home Stadium";

/// What a rendered report contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub roster_filter: RosterFilter,
    /// Fetch the home venue and add a "Home Stadium" column.
    pub include_venue: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            roster_filter: RosterFilter::Active,
            include_venue: true,
        }
    }
}

/// One report line: a team, one of its players, and its venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub team_name: String,
    pub jersey_number: String,
    pub person_name: String,
    pub position_abbreviation: String,
    pub venue_name: Option<String>,
}

impl ReportRow {
    fn record(&self, include_venue: bool) -> Vec<&str> {
        let mut record = vec![
            self.team_name.as_str(),
            self.jersey_number.as_str(),
            self.person_name.as_str(),
            self.position_abbreviation.as_str(),
        ];
        if include_venue {
            record.push(self.venue_name.as_deref().unwrap_or(""));
        }
        record
    }
}

/// Join team, roster and venue into rows, in roster order.
pub fn build_rows(
    team: &Team,
    roster: &[RosterEntry],
    venue: Option<&Venue>,
    roster_filter: RosterFilter,
) -> Vec<ReportRow> {
    roster
        .iter()
        .filter(|entry| roster_filter.admits(entry.status_description()))
        .map(|entry| ReportRow {
            team_name: team.name.clone(),
            jersey_number: entry.jersey_number.clone(),
            person_name: entry.person_name().to_string(),
            position_abbreviation: entry.position_abbreviation().to_string(),
            venue_name: venue.map(|v| v.name.clone()),
        })
        .collect()
}

/// Render the report: a header row, then one row per admitted roster entry.
///
/// Fields are quoted only when they contain a comma, quote or line break;
/// every record ends with `\n`.
pub fn render(
    team: &Team,
    roster: &[RosterEntry],
    venue: Option<&Venue>,
    options: &ReportOptions,
) -> Result<String> {
    let rows = build_rows(team, roster, venue, options.roster_filter);
    write_csv(&rows, options.include_venue)
}

pub fn write_csv(rows: &[ReportRow], include_venue: bool) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    let mut header = BASE_HEADER.to_vec();
    if include_venue {
        header.push(VENUE_HEADER);
    }
    writer.write_record(&header)?;

    for row in rows {
        writer.write_record(row.record(include_venue))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
