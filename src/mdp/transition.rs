//! State transitions.

use super::clock::Clock;
use super::config::CabConfig;
use super::error::EnvError;
use super::ride::RideTimeline;
use super::travel_time::TravelTime;
use super::types::{Action, State};

/// Computes the state reached after a driver decision.
pub struct TransitionModel;

impl TransitionModel {
    /// Next state after taking `action` in `state`.
    ///
    /// Offline keeps the location and moves the clock one hour. A ride ends
    /// at the drop location, at the time given by the same two-leg timeline
    /// the reward is computed from.
    pub fn next_state<L>(
        state: &State,
        action: &Action,
        lookup: &L,
        config: &CabConfig,
    ) -> Result<State, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        Ok(match RideTimeline::for_action(state, action, lookup, config)? {
            Some(timeline) => Self::after_ride(&timeline),
            None => Self::after_offline(state, &Clock::from_config(config))?,
        })
    }

    pub fn after_offline(state: &State, clock: &Clock) -> Result<State, EnvError> {
        let (hour, day) = clock.advance(state.hour, state.day, 1)?;
        Ok(State::new(state.location, hour, day))
    }

    pub fn after_ride(timeline: &RideTimeline) -> State {
        let (hour, day) = timeline.dropoff_time;
        State::new(timeline.dropoff, hour, day)
    }
}
