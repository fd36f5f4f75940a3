// Demonstration: drive random episodes through the cab environment.
//
// Build/run from the repo root:
//   cargo run --example random_driver -- --episodes 5 --seed 42

use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ecab::{CabConfig, CabEnvironment, EnvError, TravelTimeMatrix};

fn main() -> Result<(), EnvError> {
    let args: Vec<String> = env::args().collect();
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = CabConfig::default();
    let lookup = synthetic_lookup(&config, seed);
    let mut env = CabEnvironment::new(config, seed)?;
    let mut policy_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    for episode in 0..episodes {
        let (_, _, mut state) = env.reset();
        let mut steps = 0;
        let mut rides = 0;
        loop {
            let requests = env.requests(&state)?;
            let action = requests.actions[policy_rng.gen_range(0..requests.len())];
            let result = env.step(&state, &action, &lookup)?;
            steps += 1;
            if !action.is_offline() {
                rides += 1;
            }
            state = result.next_state;
            if result.done {
                break;
            }
        }
        println!(
            "episode {:3}: {:4} decisions, {:4} rides, {:5} h, reward {:9.1}",
            episode, steps, rides, env.episode_hours, env.cumulative_reward
        );
    }
    Ok(())
}

/// Random travel times of 1..=6 hours, zero on the diagonal.
fn synthetic_lookup(config: &CabConfig, seed: u64) -> TravelTimeMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    TravelTimeMatrix::from_fn(
        config.locations,
        config.hours_per_day,
        config.days_per_week,
        |origin, destination, _, _| {
            if origin == destination {
                0
            } else {
                rng.gen_range(1..=6)
            }
        },
    )
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
