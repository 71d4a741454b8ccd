use super::ranking::MeanScoreGroups;
use std::collections::HashMap;

/// Running total of one player's scores
///
/// The sum is wider than a single score so that any number of `i64`
/// scores can be added without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreAccumulator {
    pub sum: i128,
    pub count: u64,
}

impl ScoreAccumulator {
    pub fn add(&mut self, score: i64) {
        self.sum += i128::from(score);
        self.count += 1;
    }

    /// Mean score rounded half away from zero (2.5 -> 3, -2.5 -> -3)
    pub fn mean(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        (self.sum as f64 / self.count as f64).round() as i64
    }
}

/// Score accumulators keyed by player ID
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    players: HashMap<String, ScoreAccumulator>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one score event, creating the player's accumulator on first sight
    pub fn add_score(&mut self, player_id: &str, score: i64) {
        self.players
            .entry(player_id.to_string())
            .or_default()
            .add(score);
    }

    pub fn get(&self, player_id: &str) -> Option<&ScoreAccumulator> {
        self.players.get(player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreAccumulator)> {
        self.players.iter().map(|(id, acc)| (id.as_str(), acc))
    }

    /// Group player IDs by their rounded mean score
    pub fn mean_scores(&self) -> MeanScoreGroups {
        let mut groups = MeanScoreGroups::new();
        for (id, acc) in self.iter() {
            groups.add_player(acc.mean(), id);
        }
        groups
    }
}
