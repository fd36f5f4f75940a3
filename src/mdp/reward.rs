//! Net earnings of a driver decision.

use super::config::CabConfig;
use super::error::EnvError;
use super::ride::RideTimeline;
use super::travel_time::TravelTime;
use super::types::{Action, State};

/// Computes rewards for the cab-driver environment.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward of taking `action` in `state`.
    ///
    /// # Components
    ///
    /// - **Offline**: `-C`, one idle hour of running cost.
    /// - **Ride**: `R × trip_hours - C × (approach_hours + trip_hours)`.
    ///   Revenue is earned only with a passenger on board, while cost is
    ///   charged for the whole time from accepting to completing the ride.
    pub fn compute<L>(
        state: &State,
        action: &Action,
        lookup: &L,
        config: &CabConfig,
    ) -> Result<f64, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        Ok(match RideTimeline::for_action(state, action, lookup, config)? {
            Some(timeline) => Self::for_ride(&timeline, config),
            None => Self::offline(config),
        })
    }

    pub fn offline(config: &CabConfig) -> f64 {
        -config.cost_per_hour
    }

    pub fn for_ride(timeline: &RideTimeline, config: &CabConfig) -> f64 {
        let revenue = config.revenue_per_hour * timeline.trip_hours as f64;
        let cost = config.cost_per_hour * timeline.elapsed_hours() as f64;
        revenue - cost
    }
}
