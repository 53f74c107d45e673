//! The scoring recomputation pass: per-player round stats and the leaderboard.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use crate::bracket::classifier::classify;
use crate::bracket::points::aggregate;
use crate::model::{
    AccuracyTier, Matchup, PlayerId, PlayerRoundStats, Prediction, RoundTally, Standing,
};

/// Rebuild every player's per-round counts from scratch.
///
/// Only completed matchups are graded. Players whose picks are all still
/// pending get an entry with empty counts. Predictions for unknown matchups
/// are ignored.
pub fn recompute_player_stats<'a>(
    matchups: &[Matchup],
    predictions: impl IntoIterator<Item = &'a Prediction>,
) -> BTreeMap<PlayerId, PlayerRoundStats> {
    let by_id: HashMap<u32, &Matchup> = matchups.iter().map(|m| (m.id, m)).collect();
    let mut stats: BTreeMap<PlayerId, PlayerRoundStats> = BTreeMap::new();

    for prediction in predictions {
        let Some(matchup) = by_id.get(&prediction.matchup_id) else {
            continue;
        };
        let entry = stats
            .entry(prediction.submitted_by)
            .or_insert_with(|| PlayerRoundStats {
                player: prediction.submitted_by,
                per_round: BTreeMap::new(),
            });
        if !matchup.is_completed() {
            continue;
        }
        let tier = classify(
            matchup.round,
            Some(prediction.score()),
            matchup.actual_score(),
        );
        if tier != AccuracyTier::None {
            entry
                .per_round
                .entry(matchup.round)
                .or_default()
                .record(tier);
        }
    }
    stats
}

/// Rank players by total points, then by bullseyes. Equal points and equal
/// bullseyes share a rank.
pub fn leaderboard(stats: &BTreeMap<PlayerId, PlayerRoundStats>) -> Vec<Standing> {
    let rows = stats
        .values()
        .map(|player_stats| {
            let totals = player_stats
                .per_round
                .values()
                .fold(RoundTally::default(), |acc, tally| acc.merged(*tally));
            Standing {
                rank: 0,
                player: player_stats.player,
                points: aggregate(&player_stats.per_round).total,
                bullseyes: totals.bullseyes,
                hits: totals.hits,
                misses: totals.misses,
            }
        })
        .sorted_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.bullseyes.cmp(&a.bullseyes))
                .then(a.player.cmp(&b.player))
        })
        .collect_vec();

    let mut ranked: Vec<Standing> = Vec::with_capacity(rows.len());
    for (position, mut row) in rows.into_iter().enumerate() {
        row.rank = match ranked.last() {
            Some(prev) if prev.points == row.points && prev.bullseyes == row.bullseyes => {
                prev.rank
            }
            _ => position as u32 + 1,
        };
        ranked.push(row);
    }
    ranked
}
