//! Scoring and prediction-accuracy engine for playoff bracket pick'em leagues.
//!
//! Players predict the series score of every playoff matchup. Once a series is
//! decided each prediction is graded as a bullseye, hit or miss and earns the
//! points its round is worth. [`PlayoffEngine`] is the entry point; the
//! [`bracket`] module exposes the same rules as free functions.

pub mod bracket;
mod config;
mod engine;
mod error;
mod model;

pub use config::{Clock, FixedClock, SeasonConfig, SystemClock, DEFAULT_EDIT_DEADLINE};
pub use engine::PlayoffEngine;
pub use error::{PicksError, Result};
pub use model::*;
