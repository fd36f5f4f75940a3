//! Stochastic ride-request generation.
//!
//! The number of requests a driver sees depends on where they are: each
//! location has a Poisson mean in [`CabConfig::demand_rates`]. The draw is
//! capped at [`CabConfig::max_requests`], then that many distinct rides are
//! picked uniformly from the action space. Going offline is always offered.
//!
//! Sampling consumes from the caller's generator. A generator shared between
//! rollouts must be synchronized by the caller; give each rollout its own
//! seeded generator to keep runs reproducible.

use log::trace;
use rand::distributions::Distribution;
use rand::seq::index;
use rand::Rng;
use statrs::distribution::Poisson;

use super::config::CabConfig;
use super::error::EnvError;
use super::types::{Action, State};

/// Candidate actions offered to the policy for one decision.
///
/// `indices[i]` is the position of `actions[i]` in the action space. The last
/// entry of both vectors is always the offline action, so the offline choice
/// is reachable even when no ride was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Requests {
    pub indices: Vec<usize>,
    pub actions: Vec<Action>,
}

impl Requests {
    /// Number of genuine ride requests, excluding the offline action.
    pub fn ride_count(&self) -> usize {
        self.actions.len().saturating_sub(1)
    }

    /// Action-space indices of the ride requests only.
    pub fn ride_indices(&self) -> &[usize] {
        self.indices.get(..self.ride_count()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Never true: the offline action is always present.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates `(action_space_index, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Action)> + '_ {
        self.indices.iter().copied().zip(self.actions.iter().copied())
    }
}

/// Samples ride requests for a state.
pub struct DemandSampler;

impl DemandSampler {
    /// Draws the number of requests at the state's location and picks that
    /// many distinct rides from `action_space`, then appends the offline
    /// action.
    ///
    /// `action_space` must be the space built by
    /// [`build_action_space`](super::space::build_action_space) for `config`.
    pub fn sample_requests<R: Rng + ?Sized>(
        state: &State,
        action_space: &[Action],
        config: &CabConfig,
        rng: &mut R,
    ) -> Result<Requests, EnvError> {
        state.validate(config)?;
        if action_space.len() != config.action_space_len() {
            return Err(EnvError::Configuration(format!(
                "action space has {} entries, config expects {}",
                action_space.len(),
                config.action_space_len()
            )));
        }

        let rate = config.rate_for(state.location)?;
        let count = Self::draw_count(rate, config.max_requests, rng)?;

        let offline_index = action_space.len() - 1;
        let pool = offline_index;
        if count > pool {
            return Err(EnvError::SamplingExhausted {
                requested: count,
                available: pool,
            });
        }

        let mut indices = index::sample(rng, pool, count).into_vec();
        let mut actions: Vec<Action> = indices.iter().map(|&i| action_space[i]).collect();
        indices.push(offline_index);
        actions.push(Action::Offline);

        trace!(
            "sampled {} ride requests at location {} (rate {})",
            count,
            state.location,
            rate
        );
        Ok(Requests { indices, actions })
    }

    /// Poisson draw with mean `rate`, clamped to `cap`.
    fn draw_count<R: Rng + ?Sized>(rate: f64, cap: usize, rng: &mut R) -> Result<usize, EnvError> {
        if rate == 0.0 {
            return Ok(0);
        }
        let poisson = Poisson::new(rate)
            .map_err(|e| EnvError::Configuration(format!("demand rate {}: {}", rate, e)))?;
        let draw: f64 = poisson.sample(rng);
        let draw = draw as usize;
        if draw > cap {
            trace!("request draw {} clamped to {}", draw, cap);
        }
        Ok(draw.min(cap))
    }
}
