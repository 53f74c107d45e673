use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

/// Which side of a matchup.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Series wins for each side.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeriesScore {
    pub home: u8,
    pub away: u8,
}

impl SeriesScore {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    /// The side with more wins, or `None` when level.
    pub fn winner(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Absolute win differential.
    pub fn margin(&self) -> u8 {
        self.home.abs_diff(self.away)
    }

    /// The same score seen from the other side.
    pub fn swapped(&self) -> Self {
        Self::new(self.away, self.home)
    }
}

/// One player's predicted result for one matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub matchup_id: u32,
    pub home_score: u8,
    pub away_score: u8,
    pub submitted_by: PlayerId,
}

impl Prediction {
    pub fn score(&self) -> SeriesScore {
        SeriesScore::new(self.home_score, self.away_score)
    }
}
