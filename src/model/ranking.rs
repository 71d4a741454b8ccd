use std::collections::BTreeMap;

/// Rank counter value past which no further score groups are started
pub const RANK_LIMIT: u64 = 10;

/// Player IDs grouped by rounded mean score
#[derive(Debug, Clone, Default)]
pub struct MeanScoreGroups {
    groups: BTreeMap<i64, Vec<String>>,
}

/// One leaderboard line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub rank: u64,
    pub player_id: String,
    pub mean_score: i64,
}

impl MeanScoreGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, mean_score: i64, player_id: &str) {
        self.groups
            .entry(mean_score)
            .or_default()
            .push(player_id.to_string());
    }

    pub fn get(&self, mean_score: i64) -> Option<&[String]> {
        self.groups.get(&mean_score).map(Vec::as_slice)
    }

    /// Number of distinct mean scores
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn scores_descending(&self) -> Vec<i64> {
        self.groups.keys().rev().copied().collect()
    }

    /// Build the leaderboard.
    ///
    /// Groups are visited from the highest mean down. Tied players share a
    /// rank and are ordered by ID; the next group's rank skips past all of
    /// them. Once the rank counter exceeds `limit` no new group is started,
    /// but a group that was started is always emitted in full.
    pub fn rank(&self, limit: u64) -> Vec<RankedPlayer> {
        let mut ranking = Vec::new();
        let mut rank = 1;

        for (&mean_score, ids) in self.groups.iter().rev() {
            let mut ids = ids.clone();
            ids.sort();

            let group_size = ids.len() as u64;
            ranking.extend(ids.into_iter().map(|player_id| RankedPlayer {
                rank,
                player_id,
                mean_score,
            }));

            rank += group_size;
            if rank > limit {
                break;
            }
        }

        ranking
    }

    /// Leaderboard cut off at [`RANK_LIMIT`]
    pub fn rank_top(&self) -> Vec<RankedPlayer> {
        self.rank(RANK_LIMIT)
    }
}
