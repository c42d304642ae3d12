use std::collections::HashMap;

use anyhow::Result;
use reqwest::blocking::Client;

use crate::aggregate::{Accumulator, GamePk, PlayerId};
use crate::rankings::{Direction, top_with_ties};
use crate::statsapi::{self, Boxscore};

const TOP_N: usize = 5;

/// Prints the whole summary to stdout, resolving player names and game
/// labels on demand. The accumulator is read-only from here on.
pub fn print_report(client: &Client, totals: &Accumulator, games: usize) -> Result<()> {
    println!("SUMMARY:\n--------------------------------------\n");

    println!("Total players seen: {}", totals.appearances.len());
    print_player_ranking(client, &totals.appearances, "Most seen players: ")?;

    println!(
        "\nYou've seen {} players hit {} home runs",
        totals.home_runs.len(),
        totals.home_runs.values().sum::<u32>()
    );
    print_player_ranking(client, &totals.home_runs, "Biggest power hitters: ")?;

    println!(
        "\nYou've seen {} players hit {} triples",
        totals.triples.len(),
        totals.triples.values().sum::<u32>()
    );
    print_player_ranking(client, &totals.triples, "Fastest around the basepaths: ")?;

    println!("\nYou've seen {games} games over the years!");
    print_game_ranking(
        client,
        &totals.attendance,
        "Most attended games: ",
        Direction::Descending,
        ValueKind::Count,
    )?;
    print_game_ranking(
        client,
        &totals.attendance,
        "Least attended games: ",
        Direction::Ascending,
        ValueKind::Count,
    )?;
    print_game_ranking(
        client,
        &totals.duration_minutes,
        "Longest games attended: ",
        Direction::Descending,
        ValueKind::Duration,
    )?;
    print_game_ranking(
        client,
        &totals.duration_minutes,
        "Shortest games attended: ",
        Direction::Ascending,
        ValueKind::Duration,
    )?;

    Ok(())
}

#[derive(Clone, Copy)]
enum ValueKind {
    Count,
    Duration,
}

fn print_player_ranking(
    client: &Client,
    stat: &HashMap<PlayerId, u32>,
    label: &str,
) -> Result<()> {
    println!("{label}");
    for (player_id, count) in top_with_ties(stat, TOP_N, Direction::Descending) {
        let person = statsapi::fetch_person(client, player_id)?;
        println!("{} {}: {}", person.first_name, person.last_name, count);
    }
    Ok(())
}

fn print_game_ranking(
    client: &Client,
    stat: &HashMap<GamePk, u32>,
    label: &str,
    direction: Direction,
    kind: ValueKind,
) -> Result<()> {
    println!("{label}");
    for (game_pk, value) in top_with_ties(stat, TOP_N, direction) {
        let boxscore = statsapi::fetch_boxscore(client, game_pk)?;
        let game = game_label(&boxscore);
        let rendered = match kind {
            ValueKind::Count => value.to_string(),
            ValueKind::Duration => format_duration(value),
        };
        println!("{} {} vs. {}: {}", game.date, game.away, game.home, rendered);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLabel {
    pub date: String,
    pub away: String,
    pub home: String,
}

/// The game date rides as the label of the final info entry.
pub fn game_label(boxscore: &Boxscore) -> GameLabel {
    GameLabel {
        date: boxscore
            .info
            .last()
            .map(|item| item.label.clone())
            .unwrap_or_default(),
        away: boxscore.teams.away.team.abbreviation.clone(),
        home: boxscore.teams.home.team.abbreviation.clone(),
    }
}

/// Minutes are not zero padded: 187 renders as "3:7".
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes - 60 * hours;
    format!("{hours}:{minutes}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statsapi::parse_boxscore_json;

    #[test]
    fn renders_durations_without_zero_padding() {
        assert_eq!(format_duration(187), "3:7");
        assert_eq!(format_duration(178), "2:58");
        assert_eq!(format_duration(45), "0:45");
        assert_eq!(format_duration(120), "2:0");
    }

    #[test]
    fn game_label_uses_last_info_entry_and_abbreviations() {
        let boxscore = parse_boxscore_json(
            r#"{
                "teams": {
                    "home": { "team": { "abbreviation": "NYY" }, "players": {} },
                    "away": { "team": { "abbreviation": "SEA" }, "players": {} }
                },
                "info": [
                    { "label": "Att", "value": "39,821." },
                    { "label": "June 1, 2023" }
                ]
            }"#,
        )
        .expect("boxscore should parse");
        assert_eq!(
            game_label(&boxscore),
            GameLabel {
                date: "June 1, 2023".to_string(),
                away: "SEA".to_string(),
                home: "NYY".to_string(),
            }
        );
    }
}
