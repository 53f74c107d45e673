use serde::{Deserialize, Serialize};

/// A playoff round. Declaration order is bracket order.
#[derive(
    Debug,
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
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Round {
    PlayinFirst,
    PlayinSecond,
    First,
    Second,
    ConferenceFinal,
    Final,
}

/// Point weights for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundPoints {
    pub hit: u32,
    pub bullseye: u32,
}

/// Display grouping for standings. The two play-in sub-rounds share one bucket.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    #[strum(serialize = "Play-In")]
    PlayIn,
    #[strum(serialize = "First Round")]
    First,
    #[strum(serialize = "Conference Semifinals")]
    Second,
    #[strum(serialize = "Conference Finals")]
    ConferenceFinal,
    #[strum(serialize = "Finals")]
    Final,
}

impl From<Round> for ScoreBucket {
    fn from(round: Round) -> Self {
        match round {
            Round::PlayinFirst | Round::PlayinSecond => ScoreBucket::PlayIn,
            Round::First => ScoreBucket::First,
            Round::Second => ScoreBucket::Second,
            Round::ConferenceFinal => ScoreBucket::ConferenceFinal,
            Round::Final => ScoreBucket::Final,
        }
    }
}
