//! Human-readable workout summaries.

use std::fmt;

use serde::Serialize;

/// Summary of one workout, built once from a reading and printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub training_type: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutReport {
    /// Renders the report as a single JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
