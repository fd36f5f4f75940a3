//! Two-leg time accounting for a ride.
//!
//! A ride is an approach leg (current location to pickup) followed by a trip
//! leg (pickup to drop). The trip leg is looked up at the time reached after
//! the approach, not at the time the request was accepted. Both the reward
//! and the next state are derived from the same [`RideTimeline`].

use super::clock::Clock;
use super::config::CabConfig;
use super::error::EnvError;
use super::travel_time::TravelTime;
use super::types::{Action, State};

/// Durations and wrapped timestamps of a single ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideTimeline {
    pub pickup: usize,
    pub dropoff: usize,
    /// Hours from the current location to the pickup; 0 when already there.
    pub approach_hours: usize,
    /// Hours from pickup to drop.
    pub trip_hours: usize,
    /// `(hour, day)` on arrival at the pickup.
    pub pickup_time: (usize, usize),
    /// `(hour, day)` on arrival at the drop.
    pub dropoff_time: (usize, usize),
}

impl RideTimeline {
    /// Plans `action` from `state`, reading leg durations from `lookup`.
    ///
    /// Returns `Ok(None)` for the offline action.
    pub fn for_action<L>(
        state: &State,
        action: &Action,
        lookup: &L,
        config: &CabConfig,
    ) -> Result<Option<Self>, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        match *action {
            Action::Offline => {
                state.validate(config)?;
                Ok(None)
            }
            Action::Ride { pickup, dropoff } => {
                Self::plan(state, pickup, dropoff, lookup, config).map(Some)
            }
        }
    }

    /// Plans a ride from `state` picking up at `pickup` and dropping at
    /// `dropoff`.
    pub fn plan<L>(
        state: &State,
        pickup: usize,
        dropoff: usize,
        lookup: &L,
        config: &CabConfig,
    ) -> Result<Self, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        state.validate(config)?;
        Action::ride(pickup, dropoff).validate(config)?;
        lookup.check_dims(config)?;

        let clock = Clock::from_config(config);

        let approach_hours = if state.location == pickup {
            0
        } else {
            leg_hours(lookup, state.location, pickup, state.hour, state.day)?
        };
        let pickup_time = clock.advance(state.hour, state.day, approach_hours)?;

        let trip_hours = leg_hours(lookup, pickup, dropoff, pickup_time.0, pickup_time.1)?;
        let dropoff_time = clock.advance(pickup_time.0, pickup_time.1, trip_hours)?;
        if approach_hours.checked_add(trip_hours).is_none() {
            return Err(EnvError::Configuration(format!(
                "ride of {} + {} hours overflows",
                approach_hours, trip_hours
            )));
        }

        Ok(Self {
            pickup,
            dropoff,
            approach_hours,
            trip_hours,
            pickup_time,
            dropoff_time,
        })
    }

    /// Total hours from accepting the request to completing the trip.
    pub fn elapsed_hours(&self) -> usize {
        self.approach_hours.saturating_add(self.trip_hours)
    }
}

/// Reads one leg from the lookup, translating 1-based locations to its
/// zero-based axes.
fn leg_hours<L>(
    lookup: &L,
    from: usize,
    to: usize,
    hour: usize,
    day: usize,
) -> Result<usize, EnvError>
where
    L: TravelTime + ?Sized,
{
    lookup.hours(from - 1, to - 1, hour, day).ok_or_else(|| {
        EnvError::Configuration(format!(
            "travel-time table has no entry for {} -> {} at hour {}, day {}",
            from, to, hour, day
        ))
    })
}
