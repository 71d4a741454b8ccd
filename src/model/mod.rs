pub mod ranking;
pub mod score;

pub use ranking::{MeanScoreGroups, RankedPlayer, RANK_LIMIT};
pub use score::{PlayerTable, ScoreAccumulator};
