//! Matchup status transitions and the rules for when picks and results may change.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::bracket::validator::{series_progress, validate, SeriesProgress};
use crate::error::{PicksError, Result};
use crate::model::{Matchup, MatchupStatus, PlayerId, Prediction};

/// Predictions are editable strictly before the deadline, whatever the matchup status.
pub fn can_edit_prediction(now: NaiveDateTime, deadline: NaiveDateTime) -> bool {
    now < deadline
}

/// Move a matchup forward. Staying put is a no-op; going back is an error.
pub fn advance(matchup: &mut Matchup, to: MatchupStatus) -> Result<()> {
    if to < matchup.status {
        return Err(PicksError::StatusRegression {
            matchup_id: matchup.id,
            from: matchup.status,
            to,
        });
    }
    if to == MatchupStatus::Completed && matchup.status != MatchupStatus::Completed {
        let decided = matchup
            .actual_score()
            .is_some_and(|s| validate(matchup.round, s.home.into(), s.away.into()).is_ok());
        if !decided {
            return Err(PicksError::SeriesUndecided {
                matchup_id: matchup.id,
                round: matchup.round,
            });
        }
    }
    matchup.status = to;
    Ok(())
}

/// Build the prediction `player` wants to store for `matchup`.
///
/// Checked in order: edit deadline, completed matchup, score validity. Nothing
/// is stored here; see [`PredictionBook::upsert`].
pub fn submit_prediction(
    matchup: &Matchup,
    player: PlayerId,
    home: i32,
    away: i32,
    now: NaiveDateTime,
    deadline: NaiveDateTime,
) -> Result<Prediction> {
    if !can_edit_prediction(now, deadline) {
        return Err(PicksError::EditWindowClosed);
    }
    if matchup.is_completed() {
        return Err(PicksError::MatchupLocked {
            matchup_id: matchup.id,
        });
    }
    let score = validate(matchup.round, home, away)?;
    Ok(Prediction {
        matchup_id: matchup.id,
        home_score: score.home,
        away_score: score.away,
        submitted_by: player,
    })
}

/// Enter the actual series score for a matchup.
///
/// A partial score puts the matchup in progress; a clinching score completes it.
/// Completed matchups are frozen. On error the matchup is left untouched.
pub fn record_actual_score(matchup: &mut Matchup, home: i32, away: i32) -> Result<SeriesProgress> {
    if matchup.is_completed() {
        return Err(PicksError::MatchupLocked {
            matchup_id: matchup.id,
        });
    }
    let progress = series_progress(matchup.round, home, away)?;
    let score = progress.score();
    matchup.actual_home_score = Some(score.home);
    matchup.actual_away_score = Some(score.away);
    matchup.status = if progress.is_decided() {
        MatchupStatus::Completed
    } else {
        MatchupStatus::InProgress
    };
    Ok(progress)
}

/// Stored predictions, at most one per player per matchup.
#[derive(Debug, Clone, Default)]
pub struct PredictionBook {
    predictions: BTreeMap<(u32, PlayerId), Prediction>,
}

impl PredictionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a prediction, returning the one it replaced.
    pub fn upsert(&mut self, prediction: Prediction) -> Option<Prediction> {
        self.predictions
            .insert((prediction.matchup_id, prediction.submitted_by), prediction)
    }

    pub fn get(&self, matchup_id: u32, player: PlayerId) -> Option<&Prediction> {
        self.predictions.get(&(matchup_id, player))
    }

    pub fn for_matchup(&self, matchup_id: u32) -> impl Iterator<Item = &Prediction> {
        self.predictions
            .range((matchup_id, PlayerId::MIN)..=(matchup_id, PlayerId::MAX))
            .map(|(_, prediction)| prediction)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.predictions.values()
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

impl FromIterator<Prediction> for PredictionBook {
    fn from_iter<I: IntoIterator<Item = Prediction>>(iter: I) -> Self {
        let mut book = PredictionBook::new();
        for prediction in iter {
            book.upsert(prediction);
        }
        book
    }
}
