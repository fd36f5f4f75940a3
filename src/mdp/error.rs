use thiserror::Error;

/// Errors raised by the cab-driver environment.
///
/// These signal programming or configuration mistakes, never ordinary
/// runtime conditions, so callers are expected to fail fast on them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Location {location} is outside the valid range 1..={locations}")]
    InvalidLocation { location: usize, locations: usize },

    #[error("Time (hour {hour}, day {day}) is outside {hours_per_day} hours x {days_per_week} days")]
    InvalidTime {
        hour: usize,
        day: usize,
        hours_per_day: usize,
        days_per_week: usize,
    },

    #[error("Ride action must have distinct pickup and drop locations, got ({pickup}, {drop})")]
    InvalidAction { pickup: usize, drop: usize },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Cannot sample {requested} distinct requests from {available} ride actions")]
    SamplingExhausted { requested: usize, available: usize },

    #[error("Travel-time table expects {expected} entries, got {actual}")]
    TravelTimeShape { expected: usize, actual: usize },
}
