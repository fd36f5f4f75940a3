//! Hour/day rollover.
//!
//! Every place that moves simulated time forward goes through
//! [`Clock::advance`], so the reward of a step and the state it lands on
//! always agree on what time it is.

use super::config::CabConfig;
use super::error::EnvError;

/// Calendar geometry: hours per day and days per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub hours_per_day: usize,
    pub days_per_week: usize,
}

impl Clock {
    pub fn new(hours_per_day: usize, days_per_week: usize) -> Self {
        Self {
            hours_per_day,
            days_per_week,
        }
    }

    pub fn from_config(config: &CabConfig) -> Self {
        Self::new(config.hours_per_day, config.days_per_week)
    }

    /// Splits an hour count into `(hour_of_day, day_offset)`.
    ///
    /// `hour_count` may span any number of days or weeks.
    pub fn normalize(&self, hour_count: usize) -> (usize, usize) {
        (
            hour_count % self.hours_per_day,
            hour_count / self.hours_per_day,
        )
    }

    /// Moves `(hour, day)` forward by `elapsed` hours, wrapping across day and
    /// week boundaries.
    ///
    /// Fails when `hour + elapsed` does not fit in a `usize`, which only a
    /// malformed travel-time table can produce.
    pub fn advance(&self, hour: usize, day: usize, elapsed: usize) -> Result<(usize, usize), EnvError> {
        let total = hour.checked_add(elapsed).ok_or_else(|| {
            EnvError::Configuration(format!(
                "advancing hour {} by {} hours overflows",
                hour, elapsed
            ))
        })?;
        let (hour_of_day, day_offset) = self.normalize(total);
        let day = (day % self.days_per_week + day_offset % self.days_per_week) % self.days_per_week;
        Ok((hour_of_day, day))
    }
}
