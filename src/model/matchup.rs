use serde::{Deserialize, Serialize};

use crate::model::{Round, SeriesScore};

/// A team taking part in the playoffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub seed: Option<u8>,
    pub conference: Option<String>,
}

impl Team {
    /// A team known only by name, without seed or conference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
            conference: None,
        }
    }
}

/// Where a matchup is in its lifecycle. Ordered so that later states compare greater.
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
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchupStatus {
    #[default]
    Upcoming,
    InProgress,
    Completed,
}

/// A playoff series between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: u32,
    pub home_team: Team,
    pub away_team: Team,
    pub round: Round,
    pub status: MatchupStatus,
    pub actual_home_score: Option<u8>,
    pub actual_away_score: Option<u8>,
}

impl Matchup {
    /// A new upcoming matchup with no result yet.
    pub fn new(id: u32, home_team: Team, away_team: Team, round: Round) -> Self {
        Self {
            id,
            home_team,
            away_team,
            round,
            status: MatchupStatus::Upcoming,
            actual_home_score: None,
            actual_away_score: None,
        }
    }

    /// The actual series score, if both sides have one.
    pub fn actual_score(&self) -> Option<SeriesScore> {
        match (self.actual_home_score, self.actual_away_score) {
            (Some(home), Some(away)) => Some(SeriesScore::new(home, away)),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchupStatus::Completed
    }
}

/// A matchup as handed over by the API layer, before any validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSnapshot {
    pub round: String,
    pub status: MatchupStatus,
    pub actual_home_score: Option<i32>,
    pub actual_away_score: Option<i32>,
}

/// A prediction as handed over by the API layer, before any validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSnapshot {
    pub home_score: i32,
    pub away_score: i32,
}
