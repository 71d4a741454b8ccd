use super::records::{ScoreEvent, EXPECTED_HEADER};
use crate::error::{RankingError, Result};
use crate::model::PlayerTable;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Check that the header starts with the expected columns
pub fn check_header(header: &StringRecord) -> bool {
    header.len() >= EXPECTED_HEADER.len()
        && header
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(found, expected)| found == expected)
}

/// Wrap a CSV source and validate its header row
pub fn play_log_reader<R: Read>(source: R) -> Result<csv::Reader<R>> {
    let mut reader = csv::Reader::from_reader(source);

    let header = reader.headers().map_err(row_error)?;
    if !check_header(header) {
        return Err(RankingError::InvalidHeader(
            header.iter().collect::<Vec<_>>().join(","),
        ));
    }
    log::debug!("Header OK: {:?}", header);

    Ok(reader)
}

/// Open a game-play log file and validate its header row
pub fn open_play_log(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| RankingError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Opened play log: {}", path.display());

    play_log_reader(file)
}

/// Lazily read the data rows following the header.
///
/// Fields are taken by position from the first three columns; anything
/// after them is ignored. Each item carries the row's 1-based line number.
pub fn read_events<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<impl Iterator<Item = Result<(u64, ScoreEvent)>> + '_> {
    reader.headers().map_err(row_error)?;

    Ok(reader.records().map(|result| -> Result<(u64, ScoreEvent)> {
        let record = result.map_err(row_error)?;
        let line = record.position().map_or(0, |p| p.line());
        let event: ScoreEvent = record
            .deserialize(None)
            .map_err(|source| RankingError::ReadRow { line, source })?;
        Ok((line, event))
    }))
}

/// Aggregate every row into a player table.
///
/// Stops at the first bad row; no partial table is returned.
pub fn load_scores<R: Read>(reader: &mut csv::Reader<R>) -> Result<PlayerTable> {
    let mut table = PlayerTable::new();
    let mut rows = 0;

    for item in read_events(reader)? {
        let (line, event) = item?;
        let score = event.parse_score(line)?;
        table.add_score(&event.player_id, score);
        rows += 1;
    }

    log::debug!("Read {} score events for {} players", rows, table.len());
    Ok(table)
}

/// Open, validate, and aggregate a game-play log file
pub fn load_scores_from_path(path: &Path) -> Result<PlayerTable> {
    let mut reader = open_play_log(path)?;
    load_scores(&mut reader)
}

fn row_error(source: csv::Error) -> RankingError {
    let line = source.position().map_or(1, |p| p.line());
    RankingError::ReadRow { line, source }
}
