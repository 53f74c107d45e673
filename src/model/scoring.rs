use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{PlayerId, Round};

/// How accurate a prediction turned out to be, from worst to best.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccuracyTier {
    /// No prediction, or the series is not decided yet.
    #[default]
    None,
    /// Wrong series winner.
    Miss,
    /// Right winner; wrong margin, or any correct play-in pick.
    Hit,
    /// Right winner and exact winning margin.
    Bullseye,
}

/// Hit/bullseye/miss counts for one round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTally {
    pub hits: u32,
    pub bullseyes: u32,
    pub misses: u32,
}

impl RoundTally {
    /// Count one classified prediction. `None` tiers are not counted.
    pub fn record(&mut self, tier: AccuracyTier) {
        match tier {
            AccuracyTier::None => {}
            AccuracyTier::Miss => self.misses += 1,
            AccuracyTier::Hit => self.hits += 1,
            AccuracyTier::Bullseye => self.bullseyes += 1,
        }
    }

    /// Sum two tallies field by field, saturating at `u32::MAX`.
    pub fn merged(self, other: RoundTally) -> RoundTally {
        RoundTally {
            hits: self.hits.saturating_add(other.hits),
            bullseyes: self.bullseyes.saturating_add(other.bullseyes),
            misses: self.misses.saturating_add(other.misses),
        }
    }

    /// Total graded predictions in the round.
    pub fn picks(&self) -> u32 {
        self.hits
            .saturating_add(self.bullseyes)
            .saturating_add(self.misses)
    }
}

/// A player's per-round counts, as served by the player profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundStats {
    pub player: PlayerId,
    pub per_round: BTreeMap<Round, RoundTally>,
}

/// Points per round plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsSummary<K: Ord> {
    pub per_round: BTreeMap<K, u32>,
    pub total: u32,
}

/// The outcome of scoring one prediction against one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredPrediction {
    pub tier: AccuracyTier,
    pub points: u32,
}

/// One row of a league leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: u32,
    pub player: PlayerId,
    pub points: u32,
    pub bullseyes: u32,
    pub hits: u32,
    pub misses: u32,
}
