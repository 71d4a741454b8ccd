use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use playlog_ranking::report;
use playlog_ranking::RankingError;

#[derive(Parser)]
#[command(name = "playlog-ranking")]
#[command(version, about = "Rank players by mean score from a game-play log CSV", long_about = None)]
struct Cli {
    /// Game-play log CSV (create_timestamp,player_id,score)
    #[arg(env = "PLAYLOG_CSV")]
    input: Option<PathBuf>,

    /// Anything after the input path is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = cli.input.ok_or(RankingError::MissingInput)?;
    if !cli.ignored.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    // Everything is read and ranked before the first line is printed
    let ranking = playlog_ranking::rank_play_log(&input)?;
    report::print_ranking(&ranking).context("Failed to write ranking")?;

    Ok(())
}
