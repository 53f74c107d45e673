use chrono::Duration;

use playoff_picks::bracket::PredictionBook;
use playoff_picks::{FixedClock, Matchup, PlayoffEngine, Round, SeasonConfig, Team};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = SeasonConfig::default();
    let now = config.edit_deadline - Duration::days(1);
    let engine = PlayoffEngine::with_config(config).with_clock(FixedClock(now));

    let mut matchups = vec![
        Matchup::new(1, Team::new("Warriors"), Team::new("Grizzlies"), Round::PlayinFirst),
        Matchup::new(2, Team::new("Thunder"), Team::new("Grizzlies"), Round::First),
        Matchup::new(3, Team::new("Rockets"), Team::new("Warriors"), Round::First),
    ];

    let mut book = PredictionBook::new();
    let picks = [
        (1, 1, 1, 0),
        (1, 2, 4, 0),
        (1, 3, 4, 3),
        (2, 1, 0, 1),
        (2, 2, 4, 1),
        (2, 3, 2, 4),
        (3, 2, 4, 4),
    ];
    for (player, matchup_id, home, away) in picks {
        let Some(matchup) = matchups.iter().find(|m| m.id == matchup_id) else {
            continue;
        };
        if let Err(err) = engine.submit_prediction(&mut book, matchup, player, home, away) {
            println!("player {player} pick for matchup {matchup_id} rejected: {err}");
        }
    }

    for (matchup, (home, away)) in matchups.iter_mut().zip([(1, 0), (4, 0), (3, 4)]) {
        engine.record_actual_score(matchup, home, away).unwrap();
    }

    for matchup in &matchups {
        for prediction in book.for_matchup(matchup.id) {
            let scored = engine.score(matchup, Some(prediction));
            println!(
                "{} {} vs {}: player {} picked {}-{} -> {} ({} pts)",
                matchup.round.display_name(),
                matchup.home_team.name,
                matchup.away_team.name,
                prediction.submitted_by,
                prediction.home_score,
                prediction.away_score,
                scored.tier,
                scored.points
            );
        }
    }

    let board = engine.leaderboard(&matchups, &book);
    serde_json::to_writer_pretty(std::io::stdout(), &board).unwrap();
    println!();
}
