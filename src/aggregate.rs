use std::collections::HashMap;

use crate::error::ReportError;
use crate::statsapi::{Boxscore, RosterEntry};

pub type PlayerId = u64;
pub type GamePk = u64;

/// The single aggregate for a whole run. Every key in `home_runs` or
/// `triples` is also a key in `appearances`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub appearances: HashMap<PlayerId, u32>,
    pub home_runs: HashMap<PlayerId, u32>,
    pub triples: HashMap<PlayerId, u32>,
    pub attendance: HashMap<GamePk, u32>,
    pub duration_minutes: HashMap<GamePk, u32>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one game's boxscore in: every rostered player on both sides,
    /// then the game's attendance and duration from the info list.
    pub fn fold_boxscore(
        &mut self,
        game_pk: GamePk,
        boxscore: &Boxscore,
    ) -> Result<(), ReportError> {
        for entry in boxscore
            .teams
            .home
            .players
            .values()
            .chain(boxscore.teams.away.players.values())
        {
            self.fold_player(entry);
        }

        let attendance = info_value(boxscore, "Att")
            .and_then(|raw| parse_attendance(&raw))
            .ok_or(ReportError::MissingField {
                game_pk,
                label: "Att",
            })?;
        self.attendance.insert(game_pk, attendance);

        let minutes = info_value(boxscore, "T")
            .and_then(|raw| parse_duration_minutes(&raw))
            .ok_or(ReportError::MissingField { game_pk, label: "T" })?;
        self.duration_minutes.insert(game_pk, minutes);

        Ok(())
    }

    fn fold_player(&mut self, entry: &RosterEntry) {
        let id = entry.person.id;
        // Batting is judged by an empty line, pitching by presence of a line;
        // a bench player has neither and does not count as an appearance.
        let played = !entry.stats.batting.is_empty() || entry.stats.pitching.is_some();
        if played {
            *self.appearances.entry(id).or_insert(0) += 1;
        }
        if let Some(home_runs) = entry.stats.batting.home_runs
            && home_runs > 0
        {
            *self.home_runs.entry(id).or_insert(0) += home_runs;
        }
        if let Some(triples) = entry.stats.batting.triples
            && triples > 0
        {
            *self.triples.entry(id).or_insert(0) += triples;
        }
    }
}

/// Looks up a labeled entry in the boxscore info list. Info values carry a
/// trailing period, so the final character is always stripped.
pub fn info_value(boxscore: &Boxscore, label: &str) -> Option<String> {
    let item = boxscore.info.iter().find(|item| item.label == label)?;
    let mut value = item.value.as_deref()?.to_string();
    value.pop();
    Some(value)
}

/// `"39,821"` → 39821.
pub fn parse_attendance(raw: &str) -> Option<u32> {
    raw.replace(',', "").parse().ok()
}

/// `"3:07"` → 187 total minutes.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    Some(60 * hours + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statsapi::parse_boxscore_json;

    #[test]
    fn strips_trailing_character_from_info_values() {
        let boxscore = parse_boxscore_json(
            r#"{
                "teams": {
                    "home": { "team": { "abbreviation": "NYY" }, "players": {} },
                    "away": { "team": { "abbreviation": "SEA" }, "players": {} }
                },
                "info": [
                    { "label": "Att", "value": "39,821." },
                    { "label": "T", "value": "3:07." },
                    { "label": "June 1, 2023" }
                ]
            }"#,
        )
        .expect("boxscore should parse");
        assert_eq!(info_value(&boxscore, "Att").as_deref(), Some("39,821"));
        assert_eq!(info_value(&boxscore, "T").as_deref(), Some("3:07"));
        assert_eq!(info_value(&boxscore, "Venue"), None);
        // The date entry has no value at all.
        assert_eq!(info_value(&boxscore, "June 1, 2023"), None);
    }

    #[test]
    fn parses_attendance_with_thousands_separators() {
        assert_eq!(parse_attendance("39,821"), Some(39821));
        assert_eq!(parse_attendance("812"), Some(812));
        assert_eq!(parse_attendance("n/a"), None);
    }

    #[test]
    fn parses_duration_as_total_minutes() {
        assert_eq!(parse_duration_minutes("3:07"), Some(187));
        assert_eq!(parse_duration_minutes("2:58"), Some(178));
        assert_eq!(parse_duration_minutes("307"), None);
        assert_eq!(parse_duration_minutes("3:ab"), None);
    }
}
