//! Sports walking profile.

use super::{FromPackage, MIN_IN_H, WorkoutProfile};
use crate::reading::{COMMON_FIELD_COUNT, Reading};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout.
///
/// Besides the common reading it needs the athlete's height, taken as
/// supplied by the sensor (centimeters).
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    reading: Reading,
    height_cm: f64,
}

impl Walking {
    pub fn new(reading: Reading, height_cm: f64) -> Self {
        Self { reading, height_cm }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl FromPackage for Walking {
    const FIELD_COUNT: usize = COMMON_FIELD_COUNT + 1;

    fn from_values(values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), Self::FIELD_COUNT);
        Self::new(Reading::from_values(values), values[3])
    }
}

impl WorkoutProfile for Walking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.reading.weight_kg;
        // Floor division: the speed/height term only counts whole units.
        let speed_term = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.reading.duration_hours
            * MIN_IN_H
    }
}
