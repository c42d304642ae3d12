use thiserror::Error;

/// Everything that can go wrong between a CSV row and a finished accumulator.
/// No variant is recovered from; the first one aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("no game found for {team} on {date}")]
    GameNotFound { team: String, date: String },

    #[error("doubleheader for {team} on {date} needs a game number in the third column")]
    DisambiguationRequired { team: String, date: String },

    #[error("boxscore for game {game_pk} has no usable {label:?} entry")]
    MissingField { game_pk: u64, label: &'static str },

    #[error("unknown team code {0:?}")]
    UnknownTeam(String),
}
