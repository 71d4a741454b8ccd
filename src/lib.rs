pub mod error;
pub mod model;
pub mod playlog;
pub mod report;

pub use error::{ErrorKind, RankingError, Result};
pub use model::*;

use std::path::Path;

/// Read a game-play log and build its leaderboard, cut off at [`RANK_LIMIT`]
pub fn rank_play_log(path: &Path) -> Result<Vec<RankedPlayer>> {
    let table = playlog::load_scores_from_path(path)?;
    let groups = table.mean_scores();
    log::debug!("{} players in {} score groups", table.len(), groups.len());
    Ok(groups.rank_top())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_log(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn render(ranking: &[RankedPlayer]) -> String {
        let mut buf = Vec::new();
        report::write_ranking(&mut buf, ranking).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tie_broken_by_player_id() {
        let file = temp_log(
            "create_timestamp,player_id,score\n\
             2021/01/01 12:00,b,15\n\
             2021/01/01 12:01,a,10\n\
             2021/01/01 12:02,a,20\n",
        );
        let ranking = rank_play_log(file.path()).unwrap();
        assert_eq!(render(&ranking), "rank,player_id,mean_score\n1,a,15\n1,b,15\n");
    }

    #[test]
    fn test_eleven_players_keeps_ten() {
        let mut content = String::from("create_timestamp,player_id,score\n");
        for i in 0..11 {
            content.push_str(&format!("t,player{:02},{}\n", i, 1000 - i * 10));
        }
        let file = temp_log(&content);

        let ranking = rank_play_log(file.path()).unwrap();
        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0].player_id, "player00");
        assert_eq!(ranking[9].rank, 10);
        assert_eq!(ranking[9].player_id, "player09");
    }

    #[test]
    fn test_rounded_means() {
        let file = temp_log(
            "create_timestamp,player_id,score\n\
             t,up,2\n\
             t,up,3\n\
             t,down,-2\n\
             t,down,-3\n",
        );
        let ranking = rank_play_log(file.path()).unwrap();
        assert_eq!(render(&ranking), "rank,player_id,mean_score\n1,up,3\n2,down,-3\n");
    }

    #[test]
    fn test_same_input_same_output() {
        let file = temp_log(
            "create_timestamp,player_id,score\n\
             t,c,5\n\
             t,a,5\n\
             t,b,7\n\
             t,d,1\n",
        );
        let first = rank_play_log(file.path()).unwrap();
        let second = rank_play_log(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_score_gives_no_ranking() {
        let file = temp_log("create_timestamp,player_id,score\nt,a,1\nt,b,abc\n");
        let err = rank_play_log(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
