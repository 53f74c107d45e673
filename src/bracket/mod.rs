pub mod catalog;
pub mod classifier;
pub mod lifecycle;
pub mod points;
pub mod standings;
pub mod validator;

pub use classifier::classify;
pub use lifecycle::{
    advance, can_edit_prediction, record_actual_score, submit_prediction, PredictionBook,
};
pub use points::{aggregate, aggregate_buckets, merge_play_in, score_prediction};
pub use standings::{leaderboard, recompute_player_stats};
pub use validator::{series_progress, validate, validate_input, SeriesProgress};
