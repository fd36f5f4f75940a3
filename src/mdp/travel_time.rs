//! Travel-time lookup supplied by the integration layer.
//!
//! The environment never owns travel data; it only reads it through the
//! [`TravelTime`] trait. Location axes are zero-based here, unlike the
//! 1-based [`State::location`](super::types::State::location).

use super::config::CabConfig;
use super::error::EnvError;

/// Expected trip duration, in whole hours, between two locations at a given
/// hour of day and day of week.
pub trait TravelTime {
    /// Returns `(locations, hours_per_day, days_per_week)` covered by the table.
    fn dims(&self) -> (usize, usize, usize);

    /// Duration from `origin` to `destination` (both zero-based) departing at
    /// `hour` on `day`, or `None` outside the table.
    fn hours(&self, origin: usize, destination: usize, hour: usize, day: usize) -> Option<usize>;

    /// Checks that the table covers exactly the configured world.
    fn check_dims(&self, config: &CabConfig) -> Result<(), EnvError> {
        let expected = (config.locations, config.hours_per_day, config.days_per_week);
        let actual = self.dims();
        if actual != expected {
            return Err(EnvError::Configuration(format!(
                "travel-time table covers {:?} (locations, hours, days), config expects {:?}",
                actual, expected
            )));
        }
        Ok(())
    }
}

/// Dense 4-axis table indexed by `[origin][destination][hour][day]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTimeMatrix {
    locations: usize,
    hours_per_day: usize,
    days_per_week: usize,
    data: Vec<u32>,
}

impl TravelTimeMatrix {
    /// Wraps a row-major buffer of `locations² · hours_per_day · days_per_week`
    /// durations.
    pub fn new(
        locations: usize,
        hours_per_day: usize,
        days_per_week: usize,
        data: Vec<u32>,
    ) -> Result<Self, EnvError> {
        let expected = locations * locations * hours_per_day * days_per_week;
        if data.len() != expected {
            return Err(EnvError::TravelTimeShape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            locations,
            hours_per_day,
            days_per_week,
            data,
        })
    }

    /// Builds a table from `f(origin, destination, hour, day)`.
    pub fn from_fn<F>(locations: usize, hours_per_day: usize, days_per_week: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize, usize) -> u32,
    {
        let mut data = Vec::with_capacity(locations * locations * hours_per_day * days_per_week);
        for origin in 0..locations {
            for destination in 0..locations {
                for hour in 0..hours_per_day {
                    for day in 0..days_per_week {
                        data.push(f(origin, destination, hour, day));
                    }
                }
            }
        }
        Self {
            locations,
            hours_per_day,
            days_per_week,
            data,
        }
    }

    /// Table with the same duration everywhere, sized for `config`.
    pub fn constant(config: &CabConfig, hours: u32) -> Self {
        Self::from_fn(
            config.locations,
            config.hours_per_day,
            config.days_per_week,
            |_, _, _, _| hours,
        )
    }

    fn offset(&self, origin: usize, destination: usize, hour: usize, day: usize) -> Option<usize> {
        if origin >= self.locations
            || destination >= self.locations
            || hour >= self.hours_per_day
            || day >= self.days_per_week
        {
            return None;
        }
        Some(
            ((origin * self.locations + destination) * self.hours_per_day + hour)
                * self.days_per_week
                + day,
        )
    }

    pub fn get(&self, origin: usize, destination: usize, hour: usize, day: usize) -> Option<u32> {
        self.offset(origin, destination, hour, day)
            .and_then(|i| self.data.get(i).copied())
    }

    /// Overwrites one entry; returns `false` if the index is outside the table.
    pub fn set(&mut self, origin: usize, destination: usize, hour: usize, day: usize, hours: u32) -> bool {
        match self
            .offset(origin, destination, hour, day)
            .and_then(|i| self.data.get_mut(i))
        {
            Some(slot) => {
                *slot = hours;
                true
            }
            None => false,
        }
    }
}

impl TravelTime for TravelTimeMatrix {
    fn dims(&self) -> (usize, usize, usize) {
        (self.locations, self.hours_per_day, self.days_per_week)
    }

    fn hours(&self, origin: usize, destination: usize, hour: usize, day: usize) -> Option<usize> {
        self.get(origin, destination, hour, day).map(|h| h as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_length() {
        assert!(TravelTimeMatrix::new(2, 2, 1, vec![0; 8]).is_ok());
        assert_eq!(
            TravelTimeMatrix::new(2, 2, 1, vec![0; 7]),
            Err(EnvError::TravelTimeShape {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn from_fn_layout_matches_get() {
        let m = TravelTimeMatrix::from_fn(3, 4, 2, |o, d, h, day| {
            (o * 1000 + d * 100 + h * 10 + day) as u32
        });
        assert_eq!(m.get(2, 1, 3, 1), Some(2131));
        assert_eq!(m.get(0, 0, 0, 0), Some(0));
        assert_eq!(m.hours(1, 2, 0, 1), Some(1201));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let m = TravelTimeMatrix::constant(&CabConfig::default(), 2);
        assert_eq!(m.get(5, 0, 0, 0), None);
        assert_eq!(m.get(0, 0, 24, 0), None);
        assert_eq!(m.get(0, 0, 0, 7), None);
        assert_eq!(m.get(4, 4, 23, 6), Some(2));
    }

    #[test]
    fn set_updates_single_entry() {
        let mut m = TravelTimeMatrix::constant(&CabConfig::default(), 1);
        assert!(m.set(1, 3, 10, 3, 3));
        assert_eq!(m.get(1, 3, 10, 3), Some(3));
        assert_eq!(m.get(1, 3, 11, 3), Some(1));
        assert!(!m.set(9, 0, 0, 0, 3));
    }

    #[test]
    fn check_dims_rejects_mismatch() {
        let cfg = CabConfig::default();
        let small = TravelTimeMatrix::from_fn(4, 24, 7, |_, _, _, _| 1);
        assert!(matches!(
            small.check_dims(&cfg),
            Err(EnvError::Configuration(_))
        ));
        assert!(TravelTimeMatrix::constant(&cfg, 1).check_dims(&cfg).is_ok());
    }
}
