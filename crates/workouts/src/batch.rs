//! Sequential processing of sensor packages.

use serde::{Deserialize, Serialize};

use crate::dispatch::construct;
use crate::errors::WorkoutError;
use crate::profiles::WorkoutProfile;
use crate::report::WorkoutReport;

/// One `(type code, values)` pair received from the sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Packages processed when no package file is configured.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Builds a report for every package, in order.
///
/// Stops at the first package that fails to construct; no partial results
/// are returned.
pub fn process_batch(packages: &[SensorPackage]) -> Result<Vec<WorkoutReport>, WorkoutError> {
    packages
        .iter()
        .map(|package| {
            construct(&package.workout_type, &package.data).map(|workout| workout.summary())
        })
        .collect()
}
