//! Observation encoding for an external value model.
//!
//! States are flattened into concatenated one-hot blocks so they can be fed
//! to a network without any knowledge of the environment's types.

use super::config::CabConfig;
use super::error::EnvError;
use super::types::{Action, State};

/// Builds feature vectors for states and state-action pairs.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Encodes a state as a vector of length `m + t + d`:
    /// ```text
    /// [one_hot(location - 1; m)] ++ [one_hot(hour; t)] ++ [one_hot(day; d)]
    /// ```
    ///
    /// Out-of-range components are rejected instead of written out of bounds.
    pub fn encode_state(state: &State, config: &CabConfig) -> Result<Vec<f64>, EnvError> {
        state.validate(config)?;

        let mut obs = vec![0.0; config.state_dim()];
        obs[state.location - 1] = 1.0;
        obs[config.locations + state.hour] = 1.0;
        obs[config.locations + config.hours_per_day + state.day] = 1.0;
        Ok(obs)
    }

    /// Encodes a state-action pair as a vector of length `m + t + d + m + m`.
    ///
    /// The state encoding is followed by one-hot pickup and one-hot drop
    /// blocks; both blocks stay zero for the offline action.
    pub fn encode_state_action(
        state: &State,
        action: &Action,
        config: &CabConfig,
    ) -> Result<Vec<f64>, EnvError> {
        action.validate(config)?;

        let mut obs = Self::encode_state(state, config)?;
        let mut pickup_block = vec![0.0; config.locations];
        let mut drop_block = vec![0.0; config.locations];
        if let Action::Ride { pickup, dropoff } = *action {
            pickup_block[pickup - 1] = 1.0;
            drop_block[dropoff - 1] = 1.0;
        }
        obs.extend(pickup_block);
        obs.extend(drop_block);
        Ok(obs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_positions(v: &[f64]) -> Vec<usize> {
        v.iter()
            .enumerate()
            .filter(|(_, x)| **x == 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn encode_state_sets_three_positions() {
        let cfg = CabConfig::default();
        let obs = ObservationBuilder::encode_state(&State::new(2, 10, 3), &cfg).unwrap();
        assert_eq!(obs.len(), 36);
        assert_eq!(hot_positions(&obs), vec![1, 5 + 10, 5 + 24 + 3]);
        assert_eq!(obs.iter().sum::<f64>(), 3.0);
    }

    #[test]
    fn encode_state_boundaries() {
        let cfg = CabConfig::default();
        let first = ObservationBuilder::encode_state(&State::new(1, 0, 0), &cfg).unwrap();
        assert_eq!(hot_positions(&first), vec![0, 5, 29]);
        let last = ObservationBuilder::encode_state(&State::new(5, 23, 6), &cfg).unwrap();
        assert_eq!(hot_positions(&last), vec![4, 28, 35]);
    }

    #[test]
    fn encode_state_rejects_bad_location() {
        let cfg = CabConfig::default();
        assert!(matches!(
            ObservationBuilder::encode_state(&State::new(6, 0, 0), &cfg),
            Err(EnvError::InvalidLocation { location: 6, .. })
        ));
        assert!(matches!(
            ObservationBuilder::encode_state(&State::new(0, 0, 0), &cfg),
            Err(EnvError::InvalidLocation { location: 0, .. })
        ));
    }

    #[test]
    fn encode_state_action_ride() {
        let cfg = CabConfig::default();
        let obs = ObservationBuilder::encode_state_action(
            &State::new(1, 0, 0),
            &Action::ride(3, 5),
            &cfg,
        )
        .unwrap();
        assert_eq!(obs.len(), cfg.state_action_dim());
        assert_eq!(hot_positions(&obs), vec![0, 5, 29, 36 + 2, 41 + 4]);
    }

    #[test]
    fn encode_state_action_offline_has_empty_action_blocks() {
        let cfg = CabConfig::default();
        let obs =
            ObservationBuilder::encode_state_action(&State::new(4, 7, 2), &Action::Offline, &cfg)
                .unwrap();
        assert_eq!(obs.len(), 46);
        assert!(obs[36..].iter().all(|x| *x == 0.0));
    }

    #[test]
    fn encode_state_action_rejects_same_endpoints() {
        let cfg = CabConfig::default();
        assert!(matches!(
            ObservationBuilder::encode_state_action(&State::new(1, 0, 0), &Action::ride(2, 2), &cfg),
            Err(EnvError::InvalidAction { .. })
        ));
    }
}
