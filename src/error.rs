use crate::model::{MatchupStatus, Round};

/// All errors that can occur while validating picks and results.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PicksError {
    /// A score was negative, not a whole number, or above the clinching win count.
    #[error("invalid score: {detail}")]
    MalformedScore { detail: String },

    /// A best-of-7 score where neither side reached 4 wins.
    #[error("invalid score: one team must have 4 wins")]
    NoTeamClinched,

    /// A best-of-7 score where both sides claim 4 wins.
    #[error("invalid score: only one team can reach 4 wins")]
    BothTeamsClinched,

    /// A play-in score other than 1-0 or 0-1.
    #[error("invalid play-in score {home}-{away}: must be 1-0 or 0-1")]
    InvalidPlayInScore { home: i32, away: i32 },

    /// A round identifier that is not one of the six known rounds.
    #[error("unknown round: {0}")]
    UnknownRound(String),

    /// The season's prediction edit deadline has passed.
    #[error("predictions are locked: the edit deadline has passed")]
    EditWindowClosed,

    /// The matchup is completed, so its picks and result are frozen.
    #[error("matchup {matchup_id} is completed and can no longer be changed")]
    MatchupLocked { matchup_id: u32 },

    /// A status change that would move a matchup backwards.
    #[error("matchup {matchup_id} cannot move from {from} back to {to}")]
    StatusRegression {
        matchup_id: u32,
        from: MatchupStatus,
        to: MatchupStatus,
    },

    /// Completion was requested before either side clinched the series.
    #[error("matchup {matchup_id} in {round} has no series winner yet")]
    SeriesUndecided { matchup_id: u32, round: Round },

    /// Season configuration could not be parsed.
    #[error("invalid season config: {0}")]
    Config(String),
}

impl PicksError {
    /// Whether this is a score validation failure the caller can re-prompt for.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PicksError::MalformedScore { .. }
                | PicksError::NoTeamClinched
                | PicksError::BothTeamsClinched
                | PicksError::InvalidPlayInScore { .. }
        )
    }
}

impl From<serde_json::Error> for PicksError {
    fn from(err: serde_json::Error) -> Self {
        PicksError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PicksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_errors_are_validation() {
        assert!(PicksError::NoTeamClinched.is_validation());
        assert!(PicksError::BothTeamsClinched.is_validation());
        assert!(PicksError::InvalidPlayInScore { home: 2, away: 0 }.is_validation());
        assert!(PicksError::MalformedScore {
            detail: "-1-4 has a negative win count".to_string()
        }
        .is_validation());
    }

    #[test]
    fn test_lifecycle_errors_are_not_validation() {
        assert!(!PicksError::EditWindowClosed.is_validation());
        assert!(!PicksError::MatchupLocked { matchup_id: 1 }.is_validation());
        assert!(!PicksError::UnknownRound("semis".to_string()).is_validation());
    }
}
