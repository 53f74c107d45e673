//! Series score validation shared by prediction submission and result entry.

use serde::Serialize;

use crate::bracket::catalog::wins_to_clinch;
use crate::error::{PicksError, Result};
use crate::model::{Round, SeriesScore};

/// Where an entered series score leaves the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "score", rename_all = "lowercase")]
pub enum SeriesProgress {
    /// Neither side has clinched yet.
    Ongoing(SeriesScore),
    /// One side reached the clinching win count.
    Decided(SeriesScore),
}

impl SeriesProgress {
    pub fn score(&self) -> SeriesScore {
        match self {
            SeriesProgress::Ongoing(score) | SeriesProgress::Decided(score) => *score,
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, SeriesProgress::Decided(_))
    }
}

/// Check that `home`-`away` is a finished series result for `round`.
///
/// Best-of-7 rounds need exactly one side on 4 wins and the other on 0-3.
/// Play-in rounds are single games, so only 1-0 and 0-1 are accepted.
pub fn validate(round: Round, home: i32, away: i32) -> Result<SeriesScore> {
    if home < 0 || away < 0 {
        return Err(PicksError::MalformedScore {
            detail: format!("{home}-{away} has a negative win count"),
        });
    }

    if round.is_play_in() {
        return match (home, away) {
            (1, 0) | (0, 1) => Ok(SeriesScore::new(home as u8, away as u8)),
            _ => Err(PicksError::InvalidPlayInScore { home, away }),
        };
    }

    let clinch = i32::from(wins_to_clinch(round));
    if home > clinch || away > clinch {
        return Err(PicksError::MalformedScore {
            detail: format!("{home}-{away} exceeds {clinch} wins"),
        });
    }
    match (home == clinch, away == clinch) {
        (true, true) => Err(PicksError::BothTeamsClinched),
        (false, false) => Err(PicksError::NoTeamClinched),
        _ => Ok(SeriesScore::new(home as u8, away as u8)),
    }
}

/// Validate scores typed into a form. Text that is not a whole number is malformed.
pub fn validate_input(round: Round, home: &str, away: &str) -> Result<SeriesScore> {
    validate(round, parse_wins(home)?, parse_wins(away)?)
}

/// Classify an actual score entered while a series is still being played.
///
/// Uses the same rules as [`validate`], except that a score where nobody has
/// clinched yet is accepted as [`SeriesProgress::Ongoing`].
pub fn series_progress(round: Round, home: i32, away: i32) -> Result<SeriesProgress> {
    match validate(round, home, away) {
        Ok(score) => Ok(SeriesProgress::Decided(score)),
        Err(PicksError::NoTeamClinched) => Ok(SeriesProgress::Ongoing(SeriesScore::new(
            home as u8, away as u8,
        ))),
        Err(PicksError::InvalidPlayInScore { .. }) if home == 0 && away == 0 => {
            Ok(SeriesProgress::Ongoing(SeriesScore::new(0, 0)))
        }
        Err(err) => Err(err),
    }
}

fn parse_wins(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| PicksError::MalformedScore {
            detail: format!("'{raw}' is not a whole number"),
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;

    fn best_of_seven() -> impl Strategy<Value = Round> {
        prop_oneof![
            Just(Round::First),
            Just(Round::Second),
            Just(Round::ConferenceFinal),
            Just(Round::Final),
        ]
    }

    fn play_in() -> impl Strategy<Value = Round> {
        prop_oneof![Just(Round::PlayinFirst), Just(Round::PlayinSecond)]
    }

    proptest! {
        #[test]
        fn test_best_of_seven_accepts_only_single_clinch(round in best_of_seven(), h in 0i32..=4, a in 0i32..=4) {
            let expected = (h == 4) != (a == 4);
            prop_assert_eq!(validate(round, h, a).is_ok(), expected);
        }

        #[test]
        fn test_play_in_accepts_only_single_game(round in play_in(), h in -2i32..=5, a in -2i32..=5) {
            let expected = (h, a) == (1, 0) || (h, a) == (0, 1);
            prop_assert_eq!(validate(round, h, a).is_ok(), expected);
        }
    }

    #[test]
    fn test_both_teams_clinched() {
        assert_eq!(validate(Round::First, 4, 4), Err(PicksError::BothTeamsClinched));
    }

    #[test]
    fn test_no_team_clinched() {
        assert_eq!(validate(Round::Final, 3, 3), Err(PicksError::NoTeamClinched));
        assert_eq!(validate(Round::Second, 0, 0), Err(PicksError::NoTeamClinched));
    }

    #[test]
    fn test_negative_is_malformed_in_every_round() {
        for round in Round::iter() {
            let err = validate(round, -1, 4).unwrap_err();
            assert!(matches!(err, PicksError::MalformedScore { .. }), "{round}");
        }
    }

    #[test]
    fn test_above_clinch_is_malformed() {
        assert!(matches!(
            validate(Round::First, 5, 2),
            Err(PicksError::MalformedScore { .. })
        ));
    }

    #[test]
    fn test_play_in_rejects_best_of_seven_score() {
        assert_eq!(
            validate(Round::PlayinSecond, 4, 1),
            Err(PicksError::InvalidPlayInScore { home: 4, away: 1 })
        );
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(
            validate_input(Round::First, " 4", "2 "),
            Ok(SeriesScore::new(4, 2))
        );
        assert!(matches!(
            validate_input(Round::First, "4", "2.5"),
            Err(PicksError::MalformedScore { .. })
        ));
        assert!(matches!(
            validate_input(Round::PlayinFirst, "one", "0"),
            Err(PicksError::MalformedScore { .. })
        ));
    }

    #[test]
    fn test_series_progress() {
        assert_eq!(
            series_progress(Round::First, 2, 1),
            Ok(SeriesProgress::Ongoing(SeriesScore::new(2, 1)))
        );
        assert_eq!(
            series_progress(Round::First, 4, 1),
            Ok(SeriesProgress::Decided(SeriesScore::new(4, 1)))
        );
        assert_eq!(
            series_progress(Round::PlayinFirst, 0, 0),
            Ok(SeriesProgress::Ongoing(SeriesScore::new(0, 0)))
        );
        assert_eq!(
            series_progress(Round::First, 4, 4),
            Err(PicksError::BothTeamsClinched)
        );
        assert!(series_progress(Round::PlayinFirst, 1, 1).is_err());
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            PicksError::NoTeamClinched.to_string(),
            "invalid score: one team must have 4 wins"
        );
    }
}
