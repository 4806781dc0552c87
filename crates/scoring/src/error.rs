use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreParseError>;

/// Why a raw score string could not be turned into a comparable value.
///
/// Ranking never surfaces these: the ranking path maps every parse failure
/// to a sentinel extremum, so one bad submission cannot prevent the rest of
/// a leaderboard from being computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreParseError {
    #[error("empty score text")]
    Empty,

    #[error("invalid time format: {0:?}")]
    InvalidTime(String),

    #[error("invalid numeric score: {0:?}")]
    InvalidNumber(String),
}
