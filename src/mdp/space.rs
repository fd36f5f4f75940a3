//! Enumeration of the action and state spaces.
//!
//! Both spaces are built once per environment and then only read.

use super::config::CabConfig;
use super::types::{Action, State};

/// Every ride `(i, j)` with `i != j`, pickup-major, followed by the offline
/// action as the final element.
pub fn build_action_space(config: &CabConfig) -> Vec<Action> {
    let m = config.locations;
    let mut actions: Vec<Action> = (1..=m)
        .flat_map(|pickup| {
            (1..=m)
                .filter(move |&dropoff| dropoff != pickup)
                .map(move |dropoff| Action::ride(pickup, dropoff))
        })
        .collect();
    actions.push(Action::Offline);
    actions
}

/// The product locations x hours x days, location-major then hour then day.
pub fn build_state_space(config: &CabConfig) -> Vec<State> {
    let mut states = Vec::with_capacity(config.state_space_len());
    for location in 1..=config.locations {
        for hour in 0..config.hours_per_day {
            for day in 0..config.days_per_week {
                states.push(State::new(location, hour, day));
            }
        }
    }
    states
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn config(m: usize, t: usize, d: usize) -> CabConfig {
        CabConfig {
            locations: m,
            hours_per_day: t,
            days_per_week: d,
            demand_rates: vec![1.0; m],
            ..CabConfig::default()
        }
    }

    #[test]
    fn action_space_size_and_sentinel() {
        for m in 1..=7 {
            let cfg = config(m, 24, 7);
            let actions = build_action_space(&cfg);
            assert_eq!(actions.len(), m * (m - 1) + 1);
            assert_eq!(actions.iter().filter(|a| a.is_offline()).count(), 1);
            assert_eq!(actions.last(), Some(&Action::Offline));
        }
    }

    #[test]
    fn action_space_is_pickup_major() {
        let actions = build_action_space(&CabConfig::default());
        assert_eq!(actions[0], Action::ride(1, 2));
        assert_eq!(actions[3], Action::ride(1, 5));
        assert_eq!(actions[4], Action::ride(2, 1));
        assert_eq!(actions[19], Action::ride(5, 4));
    }

    #[test]
    fn rides_are_valid_and_distinct() {
        let cfg = CabConfig::default();
        let actions = build_action_space(&cfg);
        let unique: HashSet<_> = actions.iter().collect();
        assert_eq!(unique.len(), actions.len());
        for a in &actions {
            assert!(a.validate(&cfg).is_ok());
        }
    }

    #[test]
    fn state_space_is_full_product() {
        for (m, t, d) in [(5, 24, 7), (2, 3, 1), (3, 1, 4)] {
            let cfg = config(m, t, d);
            let states = build_state_space(&cfg);
            assert_eq!(states.len(), m * t * d);
            let unique: HashSet<_> = states.iter().collect();
            assert_eq!(unique.len(), states.len());
            for s in &states {
                assert!(s.validate(&cfg).is_ok());
            }
        }
    }

    #[test]
    fn state_space_order_is_fixed() {
        let states = build_state_space(&CabConfig::default());
        assert_eq!(states[0], State::new(1, 0, 0));
        assert_eq!(states[1], State::new(1, 0, 1));
        assert_eq!(states[7], State::new(1, 1, 0));
        assert_eq!(states.last(), Some(&State::new(5, 23, 6)));
    }
}
