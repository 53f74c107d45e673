use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use crate::bracket::{self, catalog, PredictionBook, SeriesProgress};
use crate::config::{Clock, SeasonConfig, SystemClock};
use crate::error::Result;
use crate::model::*;

/// The main entry point for scoring a playoff pick'em season.
///
/// `PlayoffEngine` holds the season settings and the clock used for the
/// prediction edit deadline, and exposes validation, grading and standings.
///
/// # Examples
///
/// ```
/// use playoff_picks::{AccuracyTier, PlayoffEngine, Round, SeriesScore};
///
/// let engine = PlayoffEngine::new();
/// let tier = engine.classify(
///     Round::First,
///     Some(SeriesScore::new(4, 1)),
///     Some(SeriesScore::new(4, 1)),
/// );
/// assert_eq!(tier, AccuracyTier::Bullseye);
/// assert_eq!(engine.points_for(Round::First, tier), 6);
/// ```
pub struct PlayoffEngine {
    config: SeasonConfig,
    clock: Box<dyn Clock>,
}

impl PlayoffEngine {
    /// Create an engine with the default season settings and the system clock.
    pub fn new() -> Self {
        Self::with_config(SeasonConfig::default())
    }

    /// Create an engine with the provided season settings.
    pub fn with_config(config: SeasonConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for deadline checks.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The season settings this engine was built with.
    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    /// Parse a wire round identifier.
    pub fn round(&self, raw: &str) -> Result<Round> {
        catalog::parse_round(raw)
    }

    /// Check a finished series score for a round.
    pub fn validate(&self, round: Round, home: i32, away: i32) -> Result<SeriesScore> {
        bracket::validate(round, home, away)
    }

    /// Grade a predicted series score against the actual one.
    pub fn classify(
        &self,
        round: Round,
        predicted: Option<SeriesScore>,
        actual: Option<SeriesScore>,
    ) -> AccuracyTier {
        bracket::classify(round, predicted, actual)
    }

    /// Points one prediction of `tier` earns in `round`.
    pub fn points_for(&self, round: Round, tier: AccuracyTier) -> u32 {
        bracket::points::points_for(round, tier)
    }

    /// Whether predictions can still be created or edited right now.
    pub fn can_edit_prediction(&self) -> bool {
        bracket::can_edit_prediction(self.clock.now(), self.config.edit_deadline)
    }

    /// Validate and store a player's prediction, replacing any earlier one.
    #[instrument(skip(self, book, matchup), fields(matchup_id = matchup.id, round = %matchup.round))]
    pub fn submit_prediction(
        &self,
        book: &mut PredictionBook,
        matchup: &Matchup,
        player: PlayerId,
        home: i32,
        away: i32,
    ) -> Result<Prediction> {
        let prediction = bracket::submit_prediction(
            matchup,
            player,
            home,
            away,
            self.clock.now(),
            self.config.edit_deadline,
        )
        .inspect_err(|err| warn!(%err, "prediction rejected"))?;
        let replaced = book.upsert(prediction.clone()).is_some();
        debug!(replaced, "stored prediction");
        Ok(prediction)
    }

    /// Enter the actual series score, moving the matchup along its lifecycle.
    #[instrument(skip(self, matchup), fields(matchup_id = matchup.id, round = %matchup.round))]
    pub fn record_actual_score(
        &self,
        matchup: &mut Matchup,
        home: i32,
        away: i32,
    ) -> Result<SeriesProgress> {
        let progress = bracket::record_actual_score(matchup, home, away)
            .inspect_err(|err| warn!(%err, "actual score rejected"))?;
        debug!(status = %matchup.status, "recorded actual score");
        Ok(progress)
    }

    /// Move a matchup to a later status.
    #[instrument(skip(self, matchup), fields(matchup_id = matchup.id))]
    pub fn advance(&self, matchup: &mut Matchup, to: MatchupStatus) -> Result<()> {
        bracket::advance(matchup, to)?;
        debug!(status = %matchup.status, "advanced matchup");
        Ok(())
    }

    /// Grade one player's prediction for a matchup.
    pub fn score(&self, matchup: &Matchup, prediction: Option<&Prediction>) -> ScoredPrediction {
        bracket::score_prediction(matchup, prediction)
    }

    /// Grade raw snapshots from the API layer.
    ///
    /// The round must be a known identifier and any scores present must be
    /// valid. The actual score only counts once the matchup is completed.
    #[instrument(skip(self))]
    pub fn score_snapshot(
        &self,
        matchup: &MatchupSnapshot,
        prediction: Option<&PredictionSnapshot>,
    ) -> Result<ScoredPrediction> {
        let round = catalog::parse_round(&matchup.round)?;
        let actual = match (
            matchup.status,
            matchup.actual_home_score,
            matchup.actual_away_score,
        ) {
            (MatchupStatus::Completed, Some(home), Some(away)) => {
                Some(bracket::validate(round, home, away)?)
            }
            _ => None,
        };
        let predicted = prediction
            .map(|p| bracket::validate(round, p.home_score, p.away_score))
            .transpose()?;
        let tier = bracket::classify(round, predicted, actual);
        Ok(ScoredPrediction {
            tier,
            points: bracket::points::points_for(round, tier),
        })
    }

    /// Rebuild every player's per-round counts from completed matchups.
    #[instrument(skip_all, fields(matchups = matchups.len(), predictions = book.len()))]
    pub fn player_stats(
        &self,
        matchups: &[Matchup],
        book: &PredictionBook,
    ) -> BTreeMap<PlayerId, PlayerRoundStats> {
        let stats = bracket::recompute_player_stats(matchups, book.iter());
        debug!(players = stats.len(), "recomputed player stats");
        stats
    }

    /// Points per display bucket for one player, with the two play-in rounds merged.
    pub fn player_points(&self, stats: &PlayerRoundStats) -> PointsSummary<ScoreBucket> {
        bracket::aggregate_buckets(&stats.per_round)
    }

    /// Recompute stats and rank all players.
    #[instrument(skip_all)]
    pub fn leaderboard(&self, matchups: &[Matchup], book: &PredictionBook) -> Vec<Standing> {
        bracket::leaderboard(&self.player_stats(matchups, book))
    }
}

impl Default for PlayoffEngine {
    fn default() -> Self {
        Self::new()
    }
}
