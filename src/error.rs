use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("specify the game-play log CSV file to process")]
    MissingInput,

    #[error("cannot access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV file: unexpected header {0:?}")]
    InvalidHeader(String),

    #[error("failed to read CSV file at line {line}: {source}")]
    ReadRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read score at line {line}: {value:?} is not an integer")]
    InvalidScore { line: u64, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad failure categories, independent of the message wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    FileAccess,
    Format,
    Parse,
    Io,
}

impl RankingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RankingError::MissingInput => ErrorKind::Argument,
            RankingError::FileAccess { .. } => ErrorKind::FileAccess,
            RankingError::InvalidHeader(_) => ErrorKind::Format,
            RankingError::ReadRow { .. } | RankingError::InvalidScore { .. } => ErrorKind::Parse,
            RankingError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;
