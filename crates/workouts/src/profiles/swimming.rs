//! Swimming profile.

use super::{FromPackage, M_IN_KM, WorkoutProfile};
use crate::reading::{COMMON_FIELD_COUNT, Reading, as_count};

/// Distance covered by one stroke, in meters.
const LEN_STROKE_M: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming workout.
///
/// Mean speed comes from the pool geometry, not from the stroke count:
/// `pool_length * laps / 1000 / duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    reading: Reading,
    pool_length_m: f64,
    pool_lap_count: i64,
}

impl Swimming {
    pub fn new(reading: Reading, pool_length_m: f64, pool_lap_count: i64) -> Self {
        Self {
            reading,
            pool_length_m,
            pool_lap_count,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> i64 {
        self.pool_lap_count
    }
}

impl FromPackage for Swimming {
    const FIELD_COUNT: usize = COMMON_FIELD_COUNT + 2;

    fn from_values(values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), Self::FIELD_COUNT);
        Self::new(Reading::from_values(values), values[3], as_count(values[4]))
    }
}

impl WorkoutProfile for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count as f64
            / M_IN_KM
            / self.reading.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.reading.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Swimming {
        Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0])
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        assert!((sample().distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_speed_from_pool() {
        let swim = sample();
        assert_eq!(swim.pool_lap_count(), 40);
        assert!((swim.pool_length_m() - 25.0).abs() < 1e-9);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        // (1.0 + 1.1) * 2 * 80
        assert!((sample().calories_kcal() - 336.0).abs() < 1e-9);
    }
}
