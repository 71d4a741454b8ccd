use crate::error::Result;
use crate::model::RankedPlayer;
use std::io::{self, BufWriter, Write};

/// First line of every leaderboard
pub const RANKING_HEADER: &str = "rank,player_id,mean_score";

/// Write the leaderboard as CSV lines.
///
/// Player IDs are written verbatim, without quoting.
pub fn write_ranking<W: Write>(out: &mut W, ranking: &[RankedPlayer]) -> Result<()> {
    writeln!(out, "{}", RANKING_HEADER)?;
    for entry in ranking {
        writeln!(out, "{},{},{}", entry.rank, entry.player_id, entry.mean_score)?;
    }
    Ok(())
}

/// Write the leaderboard to standard output
pub fn print_ranking(ranking: &[RankedPlayer]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_ranking(&mut out, ranking)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ranking: &[RankedPlayer]) -> String {
        let mut buf = Vec::new();
        write_ranking(&mut buf, ranking).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_ranking_writes_header_only() {
        assert_eq!(render(&[]), "rank,player_id,mean_score\n");
    }

    #[test]
    fn test_write_ranking() {
        let ranking = vec![
            RankedPlayer { rank: 1, player_id: "a".to_string(), mean_score: 15 },
            RankedPlayer { rank: 1, player_id: "b".to_string(), mean_score: 15 },
            RankedPlayer { rank: 3, player_id: "c".to_string(), mean_score: -2 },
        ];
        assert_eq!(
            render(&ranking),
            "rank,player_id,mean_score\n1,a,15\n1,b,15\n3,c,-2\n"
        );
    }

    #[test]
    fn test_player_id_written_verbatim() {
        let ranking = vec![RankedPlayer { rank: 1, player_id: "x,y".to_string(), mean_score: 0 }];
        assert_eq!(render(&ranking), "rank,player_id,mean_score\n1,x,y,0\n");
    }
}
