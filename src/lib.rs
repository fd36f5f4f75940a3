//! ecab - electric-cab driver MDP environment
//!
//! The environment half of a reinforcement-learning setup that decides how a
//! cab driver should move between locations over a week to maximize net
//! earnings: state and action enumeration, ride-request sampling, the reward
//! model, and the transition function with hour/day rollover.

pub mod mdp;

pub use mdp::{
    Action, CabConfig, CabEnvironment, EnvError, Requests, State, StepResult, TravelTime,
    TravelTimeMatrix,
};
