//! Cab-driver environment.
//!
//! Bundles the configuration, the cached action and state spaces, and a
//! seeded generator behind the per-step loop an external agent drives:
//! requests → choose → reward + next state.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::clock::Clock;
use super::config::CabConfig;
use super::demand::{DemandSampler, Requests};
use super::error::EnvError;
use super::observation::ObservationBuilder;
use super::reward::RewardComputer;
use super::ride::RideTimeline;
use super::space::{build_action_space, build_state_space};
use super::transition::TransitionModel;
use super::travel_time::TravelTime;
use super::types::{Action, State};

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// State reached after the action.
    pub next_state: State,
    /// Net reward of the action.
    pub reward: f64,
    /// Simulated hours the action took.
    pub elapsed_hours: usize,
    /// Hours elapsed since the last reset, including this step.
    pub episode_hours: usize,
    /// Whether the episode horizon has been reached.
    pub done: bool,
}

/// The cab-driver MDP environment.
///
/// # Lifecycle
///
/// 1. Call [`CabEnvironment::new`] with configuration and seed.
/// 2. Call [`CabEnvironment::reset`] to get the spaces and an initial state.
/// 3. Each step, call [`CabEnvironment::requests`], let the policy pick one of
///    the candidates, then call [`CabEnvironment::step`] until `done`.
#[derive(Debug)]
pub struct CabEnvironment {
    /// Environment configuration; fixed once the spaces are built from it.
    config: CabConfig,
    action_space: Vec<Action>,
    state_space: Vec<State>,
    /// Random number generator.
    rng: StdRng,
    /// Seed for reproducible resets.
    seed: u64,
    /// Hours elapsed in the current episode.
    pub episode_hours: usize,
    /// Cumulative reward this episode.
    pub cumulative_reward: f64,
}

impl CabEnvironment {
    /// Creates a new environment with the given configuration and RNG seed.
    ///
    /// Validates the configuration and builds both spaces once.
    pub fn new(config: CabConfig, seed: u64) -> Result<Self, EnvError> {
        config.validate()?;
        let action_space = build_action_space(&config);
        let state_space = build_state_space(&config);
        debug!(
            "cab environment: {} actions, {} states, seed {}",
            action_space.len(),
            state_space.len(),
            seed
        );
        Ok(Self {
            config,
            action_space,
            state_space,
            rng: StdRng::seed_from_u64(seed),
            seed,
            episode_hours: 0,
            cumulative_reward: 0.0,
        })
    }

    pub fn config(&self) -> &CabConfig {
        &self.config
    }

    pub fn action_space(&self) -> &[Action] {
        &self.action_space
    }

    pub fn state_space(&self) -> &[State] {
        &self.state_space
    }

    /// Resets the environment for a new episode.
    ///
    /// Returns the cached spaces and an initial state drawn uniformly from
    /// the state space.
    pub fn reset(&mut self) -> (&[Action], &[State], State) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1; // different seed each episode
        self.episode_hours = 0;
        self.cumulative_reward = 0.0;

        let initial = self.state_space[self.rng.gen_range(0..self.state_space.len())];
        debug!("episode reset, initial state {}", initial);
        (self.action_space.as_slice(), self.state_space.as_slice(), initial)
    }

    /// One-hot state encoding of length `m + t + d`.
    pub fn encode_state(&self, state: &State) -> Result<Vec<f64>, EnvError> {
        ObservationBuilder::encode_state(state, &self.config)
    }

    /// State-action encoding of length `m + t + d + 2m`.
    pub fn encode_state_action(&self, state: &State, action: &Action) -> Result<Vec<f64>, EnvError> {
        ObservationBuilder::encode_state_action(state, action, &self.config)
    }

    /// Samples candidate actions at `state` from the environment's generator.
    pub fn requests(&mut self, state: &State) -> Result<Requests, EnvError> {
        DemandSampler::sample_requests(state, &self.action_space, &self.config, &mut self.rng)
    }

    pub fn reward<L>(&self, state: &State, action: &Action, lookup: &L) -> Result<f64, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        RewardComputer::compute(state, action, lookup, &self.config)
    }

    pub fn next_state<L>(&self, state: &State, action: &Action, lookup: &L) -> Result<State, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        TransitionModel::next_state(state, action, lookup, &self.config)
    }

    /// Executes one decision.
    ///
    /// Reward and next state come from one ride timeline, so they always
    /// describe the same elapsed time.
    pub fn step<L>(&mut self, state: &State, action: &Action, lookup: &L) -> Result<StepResult, EnvError>
    where
        L: TravelTime + ?Sized,
    {
        let (next_state, reward, elapsed_hours) =
            match RideTimeline::for_action(state, action, lookup, &self.config)? {
                Some(timeline) => (
                    TransitionModel::after_ride(&timeline),
                    RewardComputer::for_ride(&timeline, &self.config),
                    timeline.elapsed_hours(),
                ),
                None => (
                    TransitionModel::after_offline(state, &Clock::from_config(&self.config))?,
                    RewardComputer::offline(&self.config),
                    1,
                ),
            };

        self.episode_hours = self.episode_hours.saturating_add(elapsed_hours);
        self.cumulative_reward += reward;
        let done = self.episode_hours >= self.config.episode_horizon_hours;

        debug!(
            "step {} {} -> {} reward {} (+{} h, episode {} h)",
            state, action, next_state, reward, elapsed_hours, self.episode_hours
        );

        Ok(StepResult {
            next_state,
            reward,
            elapsed_hours,
            episode_hours: self.episode_hours,
            done,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdp::travel_time::TravelTimeMatrix;

    fn make_env() -> CabEnvironment {
        CabEnvironment::new(CabConfig::default(), 42).unwrap()
    }

    #[test]
    fn new_rejects_bad_config() {
        let cfg = CabConfig {
            demand_rates: vec![1.0; 3],
            ..CabConfig::default()
        };
        assert!(matches!(
            CabEnvironment::new(cfg, 0),
            Err(EnvError::Configuration(_))
        ));
    }

    #[test]
    fn reset_returns_cached_spaces() {
        let mut env = make_env();
        let (actions, states, initial) = env.reset();
        assert_eq!(actions.len(), 21);
        assert_eq!(states.len(), 840);
        assert!(states.contains(&initial));
    }

    #[test]
    fn reset_states_are_valid_for_the_config() {
        let cfg = CabConfig {
            locations: 3,
            hours_per_day: 12,
            days_per_week: 2,
            demand_rates: vec![1.0, 2.0, 3.0],
            ..CabConfig::default()
        };
        let mut env = CabEnvironment::new(cfg, 9).unwrap();
        assert_eq!(env.action_space().len(), 7);
        for _ in 0..50 {
            let initial = env.reset().2;
            assert!(initial.validate(env.config()).is_ok());
        }
    }

    #[test]
    fn reset_is_reproducible_per_seed() {
        let mut a = make_env();
        let mut b = make_env();
        for _ in 0..5 {
            assert_eq!(a.reset().2, b.reset().2);
        }
    }

    #[test]
    fn step_accumulates_episode() {
        let mut env = make_env();
        let m = TravelTimeMatrix::constant(env.config(), 2);
        env.reset();
        let state = State::new(1, 0, 0);

        let off = env.step(&state, &Action::Offline, &m).unwrap();
        assert_eq!(off.next_state, State::new(1, 1, 0));
        assert_eq!(off.reward, -5.0);
        assert_eq!(off.elapsed_hours, 1);

        let ride = env.step(&off.next_state, &Action::ride(2, 3), &m).unwrap();
        assert_eq!(ride.next_state, State::new(3, 5, 0));
        assert_eq!(ride.reward, 9.0 * 2.0 - 5.0 * 4.0);
        assert_eq!(ride.episode_hours, 5);
        assert_eq!(env.cumulative_reward, -5.0 - 2.0);
        assert!(!ride.done);
    }

    #[test]
    fn episode_terminates_at_horizon() {
        let cfg = CabConfig {
            episode_horizon_hours: 5,
            ..CabConfig::default()
        };
        let mut env = CabEnvironment::new(cfg, 1).unwrap();
        let m = TravelTimeMatrix::constant(env.config(), 1);
        let (_, _, mut state) = env.reset();
        for t in 0..5 {
            let result = env.step(&state, &Action::Offline, &m).unwrap();
            assert_eq!(result.done, t == 4);
            state = result.next_state;
        }
    }

    #[test]
    fn step_matches_reward_and_next_state() {
        let mut env = make_env();
        let m = TravelTimeMatrix::from_fn(5, 24, 7, |o, d, h, day| ((o + 2 * d + h + day) % 5) as u32);
        let (_, _, mut state) = env.reset();
        for _ in 0..200 {
            let req = env.requests(&state).unwrap();
            let action = req.actions[0];
            let reward = env.reward(&state, &action, &m).unwrap();
            let next = env.next_state(&state, &action, &m).unwrap();
            let result = env.step(&state, &action, &m).unwrap();
            assert_eq!(result.reward, reward);
            assert_eq!(result.next_state, next);
            state = next;
        }
    }
}
