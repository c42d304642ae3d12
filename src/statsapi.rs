use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::http_client::fetch_json;

const STATSAPI_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

fn base_url() -> String {
    std::env::var("STATSAPI_BASE_URL")
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| STATSAPI_BASE_URL.to_string())
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
struct ScheduleDate {
    #[serde(default)]
    games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledGame {
    #[serde(rename = "gamePk")]
    pub game_pk: u64,
    #[serde(rename = "gameNumber", default)]
    pub game_number: u32,
}

pub fn parse_schedule_json(raw: &str) -> Result<Vec<ScheduledGame>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty schedule response"));
    }
    let parsed: ScheduleResponse =
        serde_json::from_str(trimmed).context("invalid schedule json")?;
    Ok(parsed
        .dates
        .into_iter()
        .flat_map(|date| date.games)
        .collect())
}

pub fn fetch_schedule(client: &Client, date: &str, team_id: u32) -> Result<Vec<ScheduledGame>> {
    let url = format!(
        "{}/schedule?sportId=1&startDate={date}&endDate={date}&teamId={team_id}",
        base_url()
    );
    let body = fetch_json(client, &url).context("schedule request failed")?;
    parse_schedule_json(&body)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Boxscore {
    pub teams: BoxscoreTeams,
    #[serde(default)]
    pub info: Vec<InfoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscoreTeams {
    pub home: BoxscoreSide,
    pub away: BoxscoreSide,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscoreSide {
    pub team: TeamRef,
    #[serde(default)]
    pub players: HashMap<String, RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub abbreviation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub person: PersonRef,
    #[serde(default)]
    pub stats: StatLines,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRef {
    pub id: u64,
}

/// Per-player stat lines. Batting always arrives as an object (empty for a
/// player with no batting line); pitching collapses to `None` when the feed
/// sends an empty object, so presence of `pitching` means a real line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatLines {
    #[serde(default)]
    pub batting: BattingLine,
    #[serde(default, deserialize_with = "pitching_or_none")]
    pub pitching: Option<PitchingLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BattingLine {
    #[serde(rename = "atBats")]
    pub at_bats: Option<u32>,
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub doubles: Option<u32>,
    pub triples: Option<u32>,
    #[serde(rename = "homeRuns")]
    pub home_runs: Option<u32>,
    pub rbi: Option<u32>,
    #[serde(rename = "baseOnBalls")]
    pub base_on_balls: Option<u32>,
    #[serde(rename = "strikeOuts")]
    pub strike_outs: Option<u32>,
    #[serde(rename = "stolenBases")]
    pub stolen_bases: Option<u32>,
}

impl BattingLine {
    pub fn is_empty(&self) -> bool {
        self.at_bats.is_none()
            && self.runs.is_none()
            && self.hits.is_none()
            && self.doubles.is_none()
            && self.triples.is_none()
            && self.home_runs.is_none()
            && self.rbi.is_none()
            && self.base_on_balls.is_none()
            && self.strike_outs.is_none()
            && self.stolen_bases.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PitchingLine {
    #[serde(rename = "inningsPitched")]
    pub innings_pitched: Option<String>,
    pub hits: Option<u32>,
    pub runs: Option<u32>,
    #[serde(rename = "earnedRuns")]
    pub earned_runs: Option<u32>,
    #[serde(rename = "baseOnBalls")]
    pub base_on_balls: Option<u32>,
    #[serde(rename = "strikeOuts")]
    pub strike_outs: Option<u32>,
    #[serde(rename = "homeRuns")]
    pub home_runs: Option<u32>,
}

fn pitching_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<PitchingLine>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(map) if map.is_empty() => Ok(None),
        Some(map) => serde_json::from_value(serde_json::Value::Object(map))
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// One entry of the boxscore's free-text info list. The final entry carries
/// the game date as a label with no value.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoItem {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

pub fn parse_boxscore_json(raw: &str) -> Result<Boxscore> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty boxscore response"));
    }
    serde_json::from_str(trimmed).context("invalid boxscore json")
}

pub fn fetch_boxscore(client: &Client, game_pk: u64) -> Result<Boxscore> {
    let url = format!("{}/game/{game_pk}/boxscore", base_url());
    let body = fetch_json(client, &url).context("boxscore request failed")?;
    parse_boxscore_json(&body)
}

#[derive(Debug, Deserialize)]
struct PeopleResponse {
    #[serde(default)]
    people: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

pub fn parse_person_json(raw: &str) -> Result<Person> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty person response"));
    }
    let parsed: PeopleResponse = serde_json::from_str(trimmed).context("invalid person json")?;
    parsed
        .people
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("person response has no people"))
}

pub fn fetch_person(client: &Client, player_id: u64) -> Result<Person> {
    let url = format!("{}/people/{player_id}", base_url());
    let body = fetch_json(client, &url).context("person request failed")?;
    parse_person_json(&body)
}
