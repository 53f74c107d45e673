//! Turns accuracy tiers and per-round counts into points.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::bracket::catalog;
use crate::bracket::classifier::classify;
use crate::model::{
    AccuracyTier, Matchup, PointsSummary, Prediction, Round, RoundTally, ScoreBucket,
    ScoredPrediction,
};

/// Points earned by one prediction of the given tier.
pub fn points_for(round: Round, tier: AccuracyTier) -> u32 {
    let weights = catalog::points_for(round);
    match tier {
        AccuracyTier::None | AccuracyTier::Miss => 0,
        AccuracyTier::Hit => weights.hit,
        AccuracyTier::Bullseye => weights.bullseye,
    }
}

/// Points earned by a whole round's worth of classified predictions.
///
/// Saturates at `u32::MAX` rather than overflowing.
pub fn tally_points(round: Round, tally: &RoundTally) -> u32 {
    let weights = catalog::points_for(round);
    tally
        .hits
        .saturating_mul(weights.hit)
        .saturating_add(tally.bullseyes.saturating_mul(weights.bullseye))
}

/// Per-round points and the grand total for a set of per-round counts.
pub fn aggregate(counts: &BTreeMap<Round, RoundTally>) -> PointsSummary<Round> {
    let per_round: BTreeMap<Round, u32> = counts
        .iter()
        .map(|(round, tally)| (*round, tally_points(*round, tally)))
        .collect();
    let total = per_round.values().fold(0u32, |acc, p| acc.saturating_add(*p));
    PointsSummary { per_round, total }
}

/// Fold the two play-in sub-rounds into one display bucket.
///
/// The input keeps its per-sub-round counts.
pub fn merge_play_in(counts: &BTreeMap<Round, RoundTally>) -> BTreeMap<ScoreBucket, RoundTally> {
    counts
        .iter()
        .map(|(round, tally)| (ScoreBucket::from(*round), *tally))
        .into_grouping_map()
        .fold(RoundTally::default(), |acc, _bucket, tally| acc.merged(tally))
        .into_iter()
        .collect()
}

/// Like [`aggregate`], keyed by display bucket. Points are computed per
/// sub-round first and summed into the bucket afterwards.
pub fn aggregate_buckets(counts: &BTreeMap<Round, RoundTally>) -> PointsSummary<ScoreBucket> {
    let summary = aggregate(counts);
    let per_round: BTreeMap<ScoreBucket, u32> = summary
        .per_round
        .into_iter()
        .map(|(round, points)| (ScoreBucket::from(round), points))
        .into_grouping_map()
        .fold(0u32, |acc, _bucket, points| acc.saturating_add(points))
        .into_iter()
        .collect();
    PointsSummary {
        per_round,
        total: summary.total,
    }
}

/// Classify and score one player's prediction for a matchup.
///
/// Matchups that are not completed always score [`AccuracyTier::None`].
pub fn score_prediction(matchup: &Matchup, prediction: Option<&Prediction>) -> ScoredPrediction {
    let actual = if matchup.is_completed() {
        matchup.actual_score()
    } else {
        None
    };
    let tier = classify(matchup.round, prediction.map(Prediction::score), actual);
    ScoredPrediction {
        tier,
        points: points_for(matchup.round, tier),
    }
}
