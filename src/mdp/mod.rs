//! Cab-driver MDP environment.
//!
//! The driver moves between `m` locations over a week of `t`-hour days. Each
//! decision is either a ride `(pickup, drop)` or going offline for an hour.
//! This module enumerates the spaces, samples ride requests, and computes
//! rewards and transitions; choosing actions is left to an external agent.

pub mod clock;
pub mod config;
pub mod demand;
pub mod environment;
pub mod error;
pub mod observation;
pub mod reward;
pub mod ride;
pub mod space;
pub mod transition;
pub mod travel_time;
pub mod types;


pub use clock::Clock;
pub use config::CabConfig;
pub use demand::{DemandSampler, Requests};
pub use environment::{CabEnvironment, StepResult};
pub use error::EnvError;
pub use observation::ObservationBuilder;
pub use reward::RewardComputer;
pub use ride::RideTimeline;
pub use space::{build_action_space, build_state_space};
pub use transition::TransitionModel;
pub use travel_time::{TravelTime, TravelTimeMatrix};
pub use types::{Action, State};
