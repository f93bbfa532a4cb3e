//! Running profile.

use super::{FromPackage, M_IN_KM, MIN_IN_H, WorkoutProfile};
use crate::reading::{COMMON_FIELD_COUNT, Reading};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running workout.
///
/// Calories grow linearly with mean speed:
/// `(18 * speed - 20) * weight / 1000 * duration_min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    reading: Reading,
}

impl Running {
    pub fn new(reading: Reading) -> Self {
        Self { reading }
    }
}

impl FromPackage for Running {
    const FIELD_COUNT: usize = COMMON_FIELD_COUNT;

    fn from_values(values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), Self::FIELD_COUNT);
        Self::new(Reading::from_values(values))
    }
}

impl WorkoutProfile for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn calories_kcal(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SHIFT)
            * self.reading.weight_kg
            / M_IN_KM
            * self.reading.duration_hours
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Running {
        Running::from_values(&[15000.0, 1.0, 75.0])
    }

    #[test]
    fn test_distance_and_speed() {
        let run = sample();
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((sample().calories_kcal() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_speed_halves_with_double_duration() {
        let run = Running::from_values(&[15000.0, 2.0, 75.0]);
        assert!((run.mean_speed_kmh() - 4.875).abs() < 1e-9);
    }
}
