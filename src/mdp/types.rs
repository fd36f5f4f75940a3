//! Value types of the cab-driver MDP.
//!
//! Locations are 1-based identifiers in `1..=m`; hours and days are 0-based.
//! Both [`State`] and [`Action`] are plain `Copy` values: the environment never
//! mutates a state in place, every operation returns a new one.

use std::fmt;

use super::config::CabConfig;
use super::error::EnvError;

/// Where and when the driver currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Current location, `1..=m`.
    pub location: usize,
    /// Hour of the day, `0..t`.
    pub hour: usize,
    /// Day of the week, `0..d`.
    pub day: usize,
}

impl State {
    pub fn new(location: usize, hour: usize, day: usize) -> Self {
        Self {
            location,
            hour,
            day,
        }
    }

    /// Checks every component against the configured ranges.
    pub fn validate(&self, config: &CabConfig) -> Result<(), EnvError> {
        config.check_location(self.location)?;
        if self.hour >= config.hours_per_day || self.day >= config.days_per_week {
            return Err(EnvError::InvalidTime {
                hour: self.hour,
                day: self.day,
                hours_per_day: config.hours_per_day,
                days_per_week: config.days_per_week,
            });
        }
        Ok(())
    }
}

impl From<(usize, usize, usize)> for State {
    fn from((location, hour, day): (usize, usize, usize)) -> Self {
        Self::new(location, hour, day)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(loc {}, hour {}, day {})", self.location, self.hour, self.day)
    }
}

/// A driver decision: go offline for an hour, or serve a ride.
///
/// The offline action is the sentinel `(0, 0)` of the pair representation and
/// is exempt from the location range and the distinct-endpoints rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Offline,
    Ride { pickup: usize, dropoff: usize },
}

impl Action {
    /// Pair encoding of the sentinel action.
    pub const OFFLINE_PAIR: (usize, usize) = (0, 0);

    pub fn ride(pickup: usize, dropoff: usize) -> Self {
        Action::Ride { pickup, dropoff }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Action::Offline)
    }

    /// Returns `(pickup, drop)`, with `(0, 0)` for the offline action.
    pub fn as_pair(&self) -> (usize, usize) {
        match *self {
            Action::Offline => Self::OFFLINE_PAIR,
            Action::Ride { pickup, dropoff } => (pickup, dropoff),
        }
    }

    /// Parses the pair representation, mapping `(0, 0)` to [`Action::Offline`].
    pub fn from_pair(pair: (usize, usize)) -> Self {
        if pair == Self::OFFLINE_PAIR {
            Action::Offline
        } else {
            Action::ride(pair.0, pair.1)
        }
    }

    /// Checks that a ride has in-range, distinct endpoints.
    pub fn validate(&self, config: &CabConfig) -> Result<(), EnvError> {
        match *self {
            Action::Offline => Ok(()),
            Action::Ride { pickup, dropoff } => {
                config.check_location(pickup)?;
                config.check_location(dropoff)?;
                if pickup == dropoff {
                    return Err(EnvError::InvalidAction {
                        pickup,
                        drop: dropoff,
                    });
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Offline => write!(f, "offline"),
            Action::Ride { pickup, dropoff } => write!(f, "ride {} -> {}", pickup, dropoff),
        }
    }
}
