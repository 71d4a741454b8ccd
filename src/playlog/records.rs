use crate::error::{RankingError, Result};
use serde::Deserialize;

/// Required leading columns of a game-play log, in order
pub const EXPECTED_HEADER: [&str; 3] = ["create_timestamp", "player_id", "score"];

/// One row of the game-play log, read by column position
///
/// The score is kept as text here so that a non-numeric score is reported
/// separately from a row that cannot be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreEvent {
    pub create_timestamp: String,
    pub player_id: String,
    pub score: String,
}

impl ScoreEvent {
    /// Parse the score as a signed decimal integer
    pub fn parse_score(&self, line: u64) -> Result<i64> {
        self.score.parse().map_err(|_| RankingError::InvalidScore {
            line,
            value: self.score.clone(),
        })
    }
}
