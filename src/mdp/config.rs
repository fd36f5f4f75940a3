//! Configuration for the cab-driver environment.

use super::error::EnvError;

/// Configuration for the cab-driver environment.
///
/// Controls the size of the world (locations, hours, days), the economics
/// of driving, and the demand model used to sample ride requests.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CabConfig {
    // --- World geometry ---
    /// Number of locations m (identifiers `1..=m`).
    pub locations: usize,
    /// Hours per day t.
    pub hours_per_day: usize,
    /// Days per week d.
    pub days_per_week: usize,

    // --- Economics ---
    /// Per-hour battery and running cost C, charged while driving or idle.
    pub cost_per_hour: f64,
    /// Per-hour revenue R, earned only while a passenger is on board.
    pub revenue_per_hour: f64,

    // --- Demand ---
    /// Poisson mean of ride requests per location, indexed by `location - 1`.
    pub demand_rates: Vec<f64>,
    /// Hard cap on requests presented in a single step.
    pub max_requests: usize,

    // --- Episode ---
    /// Simulated hours after which an episode is done.
    pub episode_horizon_hours: usize,
}

impl CabConfig {
    /// Checks internal consistency; every environment entry point relies on it.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.locations == 0 || self.hours_per_day == 0 || self.days_per_week == 0 {
            return Err(EnvError::Configuration(
                "locations, hours_per_day and days_per_week must be positive".into(),
            ));
        }
        if self.demand_rates.len() != self.locations {
            return Err(EnvError::Configuration(format!(
                "expected {} demand rates, got {}",
                self.locations,
                self.demand_rates.len()
            )));
        }
        if let Some(rate) = self
            .demand_rates
            .iter()
            .find(|r| !r.is_finite() || **r < 0.0)
        {
            return Err(EnvError::Configuration(format!(
                "demand rate {} is not a non-negative finite number",
                rate
            )));
        }
        if !self.cost_per_hour.is_finite() || !self.revenue_per_hour.is_finite() {
            return Err(EnvError::Configuration(
                "cost and revenue per hour must be finite".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn check_location(&self, location: usize) -> Result<(), EnvError> {
        if (1..=self.locations).contains(&location) {
            Ok(())
        } else {
            Err(EnvError::InvalidLocation {
                location,
                locations: self.locations,
            })
        }
    }

    /// Poisson mean of requests at `location`.
    pub fn rate_for(&self, location: usize) -> Result<f64, EnvError> {
        self.check_location(location)?;
        self.demand_rates.get(location - 1).copied().ok_or_else(|| {
            EnvError::Configuration(format!("no demand rate for location {}", location))
        })
    }

    /// Number of genuine ride actions, `m * (m - 1)`.
    pub fn ride_count(&self) -> usize {
        self.locations * self.locations.saturating_sub(1)
    }

    /// Ride actions plus the offline sentinel.
    pub fn action_space_len(&self) -> usize {
        self.ride_count() + 1
    }

    pub fn state_space_len(&self) -> usize {
        self.locations * self.hours_per_day * self.days_per_week
    }

    /// Length of the one-hot state encoding, `m + t + d`.
    pub fn state_dim(&self) -> usize {
        self.locations + self.hours_per_day + self.days_per_week
    }

    /// Length of the state-action encoding, `m + t + d + m + m`.
    pub fn state_action_dim(&self) -> usize {
        self.state_dim() + 2 * self.locations
    }
}

impl Default for CabConfig {
    fn default() -> Self {
        Self {
            locations: 5,
            hours_per_day: 24,
            days_per_week: 7,
            cost_per_hour: 5.0,
            revenue_per_hour: 9.0,
            demand_rates: vec![2.0, 12.0, 4.0, 7.0, 8.0],
            max_requests: 15,
            episode_horizon_hours: 24 * 30,
        }
    }
}
