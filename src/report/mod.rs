//! Leaderboard output

pub mod writer;

pub use writer::{print_ranking, write_ranking, RANKING_HEADER};
