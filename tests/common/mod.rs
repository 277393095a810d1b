//! Shared mock stats API for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use mlb_roster::{
    core::{build_client, FixedClock},
    mlb::http::StatsApiClient,
    ReportOptions, RosterService,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

/// 2023 San Francisco Giants active roster, in API order.
///
/// Keep in sync with the copy in `src/mlb/testing.rs`.
pub const GIANTS_ROSTER: [(&str, &str, &str); 26] = [
    ("38", "Alex Cobb", "P"),
    ("57", "Alex Wood", "P"),
    ("13", "Austin Slater", "LF"),
    ("2", "Blake Sabol", "C"),
    ("75", "Camilo Doval", "P"),
    ("6", "Casey Schmitt", "SS"),
    ("7", "J.D. Davis", "3B"),
    ("34", "Jakob Junis", "P"),
    ("23", "Joc Pederson", "DH"),
    ("45", "Kyle Harrison", "P"),
    ("31", "LaMonte Wade Jr.", "1B"),
    ("62", "Logan Webb", "P"),
    ("77", "Luke Jackson", "P"),
    ("5", "Mike Yastrzemski", "CF"),
    ("17", "Mitch Haniger", "LF"),
    ("14", "Patrick Bailey", "C"),
    ("18", "Paul DeJong", "SS"),
    ("74", "Ryan Walker", "P"),
    ("54", "Scott Alexander", "P"),
    ("52", "Sean Manaea", "P"),
    ("33", "Taylor Rogers", "P"),
    ("39", "Thairo Estrada", "2B"),
    ("43", "Tristan Beck", "P"),
    ("71", "Tyler Rogers", "P"),
    ("53", "Wade Meckler", "OF"),
    ("41", "Wilmer Flores", "1B"),
];

/// Expected report for the Giants with the venue column.
pub fn expected_giants_report() -> String {
    let mut report = String::from("Team,Jersey,Name,Position,Home Stadium\n");
    for (jersey, name, position) in GIANTS_ROSTER {
        report.push_str(&format!(
            "San Francisco Giants,{jersey},{name},{position},Oracle Park\n"
        ));
    }
    report
}

pub fn team_json(id: u32, name: &str, active: bool, venue_id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "link": format!("/api/v1/teams/{id}"),
        "season": 2023,
        "venue": { "id": venue_id, "link": format!("/api/v1/venues/{venue_id}") },
        "sport": { "id": 1, "name": "Major League Baseball" },
        "active": active
    })
}

pub fn giants_json() -> Value {
    team_json(137, "San Francisco Giants", true, 2395)
}

/// Season search response; "giants" matches San Francisco only, "new york" matches two.
pub fn league_json() -> Value {
    json!({
        "copyright": "Copyright 2023 MLB Advanced Media, L.P.",
        "teams": [
            team_json(108, "Los Angeles Angels", true, 1),
            team_json(119, "Los Angeles Dodgers", true, 22),
            team_json(121, "New York Mets", true, 3289),
            team_json(147, "New York Yankees", true, 3313),
            giants_json(),
            team_json(999, "Brooklyn Giants", false, 5)
        ]
    })
}

pub fn player_json(jersey: &str, name: &str, position: &str, status: &str) -> Value {
    json!({
        "person": { "id": 1, "fullName": name, "link": "/api/v1/people/1" },
        "jerseyNumber": jersey,
        "position": { "code": "1", "name": "Pitcher", "type": "Pitcher", "abbreviation": position },
        "status": { "code": "A", "description": status },
        "parentTeamId": 137
    })
}

pub fn giants_roster_players() -> Vec<Value> {
    GIANTS_ROSTER
        .iter()
        .map(|(jersey, name, position)| player_json(jersey, name, position, "Active"))
        .collect()
}

pub fn roster_json(players: Vec<Value>) -> Value {
    json!({
        "copyright": "Copyright 2023 MLB Advanced Media, L.P.",
        "roster": players,
        "link": "/api/v1/teams/137/roster",
        "teamId": 137,
        "rosterType": "active"
    })
}

pub fn oracle_park_json() -> Value {
    json!({
        "venues": [{
            "id": 2395,
            "name": "Oracle Park",
            "link": "/api/v1/venues/2395",
            "active": true,
            "season": "2023"
        }]
    })
}

pub async fn mount_team_by_id(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("season", "2023"))
        .and(query_param("sportIds", "1"))
        .and(query_param("teamId", "137"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_league(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("season", "2023"))
        .and(query_param("sportIds", "1"))
        .and(query_param_is_missing("teamId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_roster(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_venue(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v1/venues/2395"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mock server serving the 2023 Giants on every endpoint.
pub async fn giants_server() -> MockServer {
    let server = MockServer::start().await;
    mount_team_by_id(&server, json!({ "teams": [giants_json()] })).await;
    mount_league(&server, league_json()).await;
    mount_roster(&server, roster_json(giants_roster_players())).await;
    mount_venue(
        &server,
        ResponseTemplate::new(200).set_body_json(oracle_park_json()),
    )
    .await;
    server
}

/// Service against `server`, with the clock pinned to the 2023 season.
pub fn service_for(server: &MockServer, options: ReportOptions) -> RosterService {
    let gateway = StatsApiClient::new(build_client(None).unwrap(), &server.uri()).unwrap();
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2023, 9, 22).unwrap());
    RosterService::new(Arc::new(gateway), Arc::new(clock), options)
}
