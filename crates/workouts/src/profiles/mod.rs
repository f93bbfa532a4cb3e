//! Workout calculation profiles.
//!
//! Each profile turns a raw sensor reading into distance, mean speed and
//! calories. The three workouts share the distance and speed formulas and
//! differ in their calorie formulas; swimming also measures speed from the
//! pool rather than from strokes.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::reading::Reading;
use crate::report::WorkoutReport;

/// Distance covered by one step, in meters.
pub const LEN_STEP_M: f64 = 0.65;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Trait for workout calculation profiles.
///
/// Implementations provide:
/// - The display name used in reports
/// - The common reading
/// - A calorie formula
///
/// Distance and mean speed have default formulas based on the step length,
/// which implementations may override.
pub trait WorkoutProfile {
    /// Name printed in the report line.
    fn name(&self) -> &'static str;

    /// Common part of the reading.
    fn reading(&self) -> &Reading;

    /// Length of one step or stroke in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64 {
        self.reading().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.reading().duration_hours
    }

    /// Calories burned in kcal.
    fn calories_kcal(&self) -> f64;

    /// Computes every metric and packs them into a report.
    fn summary(&self) -> WorkoutReport {
        WorkoutReport {
            training_type: self.name(),
            duration_hours: self.reading().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Builds a profile from the positional values of a sensor package.
///
/// Kept apart from [`WorkoutProfile`] so that trait stays dyn-compatible.
pub trait FromPackage: Sized {
    /// Number of values a package for this workout carries.
    const FIELD_COUNT: usize;

    /// Binds `values` positionally.
    ///
    /// `values.len()` must equal [`Self::FIELD_COUNT`]; use
    /// [`construct`](crate::dispatch::construct) for unchecked input.
    fn from_values(values: &[f64]) -> Self;
}
