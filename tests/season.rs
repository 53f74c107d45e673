use chrono::{Duration, NaiveDateTime};
use playoff_picks::bracket::PredictionBook;
use playoff_picks::{
    AccuracyTier, FixedClock, Matchup, MatchupSnapshot, MatchupStatus, PicksError, PlayoffEngine,
    PredictionSnapshot, Round, ScoreBucket, SeasonConfig, Team, DEFAULT_EDIT_DEADLINE,
};

fn engine_at(now: NaiveDateTime) -> PlayoffEngine {
    PlayoffEngine::with_config(SeasonConfig::default()).with_clock(FixedClock(now))
}

fn before_deadline() -> NaiveDateTime {
    DEFAULT_EDIT_DEADLINE - Duration::days(2)
}

fn bracket() -> Vec<Matchup> {
    vec![
        Matchup::new(1, Team::new("Heat"), Team::new("Bulls"), Round::PlayinFirst),
        Matchup::new(2, Team::new("Kings"), Team::new("Mavericks"), Round::PlayinSecond),
        Matchup::new(3, Team::new("Cavaliers"), Team::new("Heat"), Round::First),
        Matchup::new(4, Team::new("Thunder"), Team::new("Grizzlies"), Round::First),
    ]
}

#[test]
fn test_full_season() {
    let engine = engine_at(before_deadline());
    let mut matchups = bracket();
    let mut book = PredictionBook::new();

    // player 1: perfect on play-in, bullseye and hit in the first round
    engine.submit_prediction(&mut book, &matchups[0], 1, 1, 0).unwrap();
    engine.submit_prediction(&mut book, &matchups[1], 1, 0, 1).unwrap();
    engine.submit_prediction(&mut book, &matchups[2], 1, 4, 0).unwrap();
    engine.submit_prediction(&mut book, &matchups[3], 1, 4, 2).unwrap();
    // player 2: edits a pick, then misses most
    engine.submit_prediction(&mut book, &matchups[0], 2, 1, 0).unwrap();
    engine.submit_prediction(&mut book, &matchups[0], 2, 0, 1).unwrap();
    engine.submit_prediction(&mut book, &matchups[2], 2, 3, 4).unwrap();
    engine.submit_prediction(&mut book, &matchups[3], 2, 4, 1).unwrap();
    assert_eq!(book.len(), 7);

    engine.record_actual_score(&mut matchups[0], 1, 0).unwrap();
    engine.record_actual_score(&mut matchups[1], 0, 1).unwrap();
    engine.record_actual_score(&mut matchups[2], 2, 0).unwrap();
    assert_eq!(matchups[2].status, MatchupStatus::InProgress);
    engine.record_actual_score(&mut matchups[2], 4, 0).unwrap();
    engine.record_actual_score(&mut matchups[3], 4, 1).unwrap();
    assert!(matchups.iter().all(Matchup::is_completed));

    let stats = engine.player_stats(&matchups, &book);
    let first = engine.player_points(&stats[&1]);
    assert_eq!(first.per_round[&ScoreBucket::PlayIn], 4);
    assert_eq!(first.per_round[&ScoreBucket::First], 6 + 4);
    assert_eq!(first.total, 14);
    assert_eq!(stats[&1].per_round[&Round::PlayinFirst].hits, 1);
    assert_eq!(stats[&1].per_round[&Round::PlayinSecond].hits, 1);

    let board = engine.leaderboard(&matchups, &book);
    assert_eq!(board[0].player, 1);
    assert_eq!(board[0].points, 14);
    assert_eq!(board[1].player, 2);
    assert_eq!(board[1].points, 6);
    assert_eq!(board[1].misses, 2);
}

#[test]
fn test_completed_matchup_rejects_edits_before_deadline() {
    let engine = engine_at(before_deadline());
    let mut matchups = bracket();
    let mut book = PredictionBook::new();
    engine.record_actual_score(&mut matchups[2], 4, 3).unwrap();

    let err = engine
        .submit_prediction(&mut book, &matchups[2], 1, 4, 3)
        .unwrap_err();
    assert_eq!(err, PicksError::MatchupLocked { matchup_id: 3 });
    assert!(book.is_empty());
}

#[test]
fn test_deadline_blocks_upcoming_matchup() {
    let engine = engine_at(DEFAULT_EDIT_DEADLINE + Duration::minutes(1));
    let matchups = bracket();
    let mut book = PredictionBook::new();

    assert!(!engine.can_edit_prediction());
    let err = engine
        .submit_prediction(&mut book, &matchups[3], 1, 4, 0)
        .unwrap_err();
    assert_eq!(err, PicksError::EditWindowClosed);
    assert!(!err.is_validation());
}

#[test]
fn test_score_snapshot_from_json() {
    let engine = PlayoffEngine::new();
    let matchup: MatchupSnapshot = serde_json::from_str(
        r#"{"round":"conference_final","status":"completed","actualHomeScore":2,"actualAwayScore":4}"#,
    )
    .unwrap();
    let prediction: PredictionSnapshot =
        serde_json::from_str(r#"{"homeScore":2,"awayScore":4}"#).unwrap();

    let scored = engine.score_snapshot(&matchup, Some(&prediction)).unwrap();
    assert_eq!(scored.tier, AccuracyTier::Bullseye);
    assert_eq!(scored.points, 12);

    let json = serde_json::to_value(scored).unwrap();
    assert_eq!(json["tier"], "bullseye");
}

#[test]
fn test_score_snapshot_rejects_unknown_round() {
    let engine = PlayoffEngine::new();
    let matchup = MatchupSnapshot {
        round: "quarterfinal".to_string(),
        status: MatchupStatus::Upcoming,
        actual_home_score: None,
        actual_away_score: None,
    };
    assert_eq!(
        engine.score_snapshot(&matchup, None),
        Err(PicksError::UnknownRound("quarterfinal".to_string()))
    );
}

#[test]
fn test_score_snapshot_in_progress_is_none() {
    let engine = PlayoffEngine::new();
    let matchup: MatchupSnapshot = serde_json::from_str(
        r#"{"round":"final","status":"in-progress","actualHomeScore":3,"actualAwayScore":1}"#,
    )
    .unwrap();
    let prediction = PredictionSnapshot {
        home_score: 4,
        away_score: 1,
    };
    let scored = engine.score_snapshot(&matchup, Some(&prediction)).unwrap();
    assert_eq!(scored.tier, AccuracyTier::None);
    assert_eq!(scored.points, 0);
}
