use crate::model::{AccuracyTier, Round, SeriesScore};

/// Grade a predicted series score against the actual one.
///
/// A bullseye needs the right winner and the same absolute winning margin.
/// Play-in rounds top out at [`AccuracyTier::Hit`]. A level actual score means
/// the series is undecided; a level prediction never names a winner.
pub fn classify(
    round: Round,
    predicted: Option<SeriesScore>,
    actual: Option<SeriesScore>,
) -> AccuracyTier {
    let (Some(predicted), Some(actual)) = (predicted, actual) else {
        return AccuracyTier::None;
    };
    let Some(actual_winner) = actual.winner() else {
        return AccuracyTier::None;
    };
    if predicted.winner() != Some(actual_winner) {
        return AccuracyTier::Miss;
    }
    if round.is_play_in() {
        return AccuracyTier::Hit;
    }
    if predicted.margin() == actual.margin() {
        AccuracyTier::Bullseye
    } else {
        AccuracyTier::Hit
    }
}
