use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::{DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, TICK_STEP_PER_POINT_MS};
use crate::error::ParsePacingError;

/// How the tick period is chosen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Pacing {
    /// Constant period.
    #[default]
    Fixed,
    /// Period shrinks with every point scored, down to a floor.
    Accelerating,
}

impl Pacing {
    /// Tick period for a round whose agents have scored `total_score` points.
    #[must_use]
    pub fn interval(self, total_score: u32) -> Duration {
        match self {
            Self::Fixed => Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            Self::Accelerating => {
                let speedup_ms = u64::from(total_score) * TICK_STEP_PER_POINT_MS;
                let clamped_ms = DEFAULT_TICK_INTERVAL_MS
                    .saturating_sub(speedup_ms)
                    .max(MIN_TICK_INTERVAL_MS);
                Duration::from_millis(clamped_ms)
            }
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fixed => "fixed",
            Self::Accelerating => "accelerating",
        })
    }
}

impl FromStr for Pacing {
    type Err = ParsePacingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "accelerating" => Ok(Self::Accelerating),
            _ => Err(ParsePacingError(raw.to_owned())),
        }
    }
}
