//! Round reference data: point weights, display names and series length.
//!
//! Every point value in the crate comes from [`points_for`]. Nothing else may
//! hard-code a weight.

use std::str::FromStr;

use crate::error::{PicksError, Result};
use crate::model::{Round, RoundPoints};

/// Point weights for a round.
pub fn points_for(round: Round) -> RoundPoints {
    let (hit, bullseye) = match round {
        Round::PlayinFirst | Round::PlayinSecond => (2, 2),
        Round::First => (4, 6),
        Round::Second => (6, 9),
        Round::ConferenceFinal => (8, 12),
        Round::Final => (10, 15),
    };
    RoundPoints { hit, bullseye }
}

/// Human readable round name.
pub fn display_name(round: Round) -> &'static str {
    match round {
        Round::PlayinFirst => "Play-In (First)",
        Round::PlayinSecond => "Play-In (Second)",
        Round::First => "First Round",
        Round::Second => "Conference Semifinals",
        Round::ConferenceFinal => "Conference Finals",
        Round::Final => "Finals",
    }
}

/// Parse a wire round identifier such as `conference_final`.
pub fn parse_round(raw: &str) -> Result<Round> {
    Round::from_str(raw.trim()).map_err(|_| PicksError::UnknownRound(raw.to_string()))
}

/// Whether the round is a single-elimination play-in game.
pub fn is_play_in(round: Round) -> bool {
    matches!(round, Round::PlayinFirst | Round::PlayinSecond)
}

/// Wins needed to take the series: 1 for single-elimination play-in, 4 for best-of-7.
pub fn wins_to_clinch(round: Round) -> u8 {
    if is_play_in(round) {
        1
    } else {
        4
    }
}

impl Round {
    pub fn points(self) -> RoundPoints {
        points_for(self)
    }

    pub fn display_name(self) -> &'static str {
        display_name(self)
    }

    pub fn is_play_in(self) -> bool {
        is_play_in(self)
    }

    pub fn wins_to_clinch(self) -> u8 {
        wins_to_clinch(self)
    }
}
