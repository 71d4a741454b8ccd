pub mod reader;
pub mod records;

pub use reader::{load_scores, load_scores_from_path, open_play_log, read_events};
pub use records::{ScoreEvent, EXPECTED_HEADER};
