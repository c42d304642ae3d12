use anyhow::Result;
use reqwest::blocking::Client;

use crate::attendance::AttendanceRow;
use crate::error::ReportError;
use crate::statsapi::{self, ScheduledGame};
use crate::teams;

/// Maps an attendance row to the gamePk of the game that was attended.
pub fn resolve_game(client: &Client, row: &AttendanceRow) -> Result<u64> {
    let team_id = teams::team_id(&row.home_team)
        .ok_or_else(|| ReportError::UnknownTeam(row.home_team.clone()))?;
    let games = statsapi::fetch_schedule(client, &row.date, team_id)?;
    Ok(select_game(&games, row)?)
}

/// Picks the attended game out of a day's schedule. A lone game wins outright;
/// a doubleheader is settled by the row's game number or refused.
pub fn select_game(games: &[ScheduledGame], row: &AttendanceRow) -> Result<u64, ReportError> {
    match games {
        [] => Err(not_found(row)),
        [only] => Ok(only.game_pk),
        _ => match row.game_number {
            Some(number) => games
                .iter()
                .find(|game| game.game_number == number)
                .map(|game| game.game_pk)
                .ok_or_else(|| not_found(row)),
            None => Err(ReportError::DisambiguationRequired {
                team: row.home_team.clone(),
                date: row.date.clone(),
            }),
        },
    }
}

fn not_found(row: &AttendanceRow) -> ReportError {
    ReportError::GameNotFound {
        team: row.home_team.clone(),
        date: row.date.clone(),
    }
}
