use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Last moment predictions may be created or edited in the 2025 season.
pub const DEFAULT_EDIT_DEADLINE: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(2025, 4, 14),
    NaiveTime::from_hms_opt(23, 59, 59),
) {
    (Some(date), Some(time)) => NaiveDateTime::new(date, time),
    _ => panic!("default edit deadline is not a valid date"),
};

/// Per-season settings.
///
/// ```
/// use playoff_picks::SeasonConfig;
///
/// let config = SeasonConfig::from_json(r#"{"edit_deadline":"2026-04-18T12:00:00"}"#)?;
/// assert_eq!(config.edit_deadline.to_string(), "2026-04-18 12:00:00");
/// # Ok::<(), playoff_picks::PicksError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Predictions are editable strictly before this local time.
    #[serde(default = "default_edit_deadline")]
    pub edit_deadline: NaiveDateTime,
}

impl SeasonConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            edit_deadline: DEFAULT_EDIT_DEADLINE,
        }
    }
}

fn default_edit_deadline() -> NaiveDateTime {
    DEFAULT_EDIT_DEADLINE
}

/// Source of "now" for deadline checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
