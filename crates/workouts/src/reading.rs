//! Raw sensor readings shared by every workout.

/// Number of values every sensor package starts with:
/// action count, duration and weight.
pub const COMMON_FIELD_COUNT: usize = 3;

/// Common part of a workout reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Number of steps or strokes.
    pub action_count: i64,
    /// Workout duration in hours.
    pub duration_hours: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

impl Reading {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        if duration_hours <= 0.0 || weight_kg <= 0.0 {
            tracing::warn!(
                duration_hours,
                weight_kg,
                "Reading has a non-positive duration or weight"
            );
        }
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Binds the leading common values of a package.
    ///
    /// Callers check the package length first; `values` must hold at least
    /// [`COMMON_FIELD_COUNT`] entries.
    pub(crate) fn from_values(values: &[f64]) -> Self {
        Self::new(as_count(values[0]), values[1], values[2])
    }
}

/// Converts a sensor value to a whole count, truncating any fraction.
///
/// Negative counts are kept as they are. Non-finite or out-of-range values
/// saturate (NaN becomes 0).
pub(crate) fn as_count(value: f64) -> i64 {
    if !value.is_finite() || value < 0.0 || value.abs() >= i64::MAX as f64 {
        tracing::warn!(value, "Count is negative, non-finite or out of range");
    }
    value as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_binds_in_order() {
        let reading = Reading::from_values(&[15000.0, 1.5, 75.0]);
        assert_eq!(reading.action_count, 15000);
        assert!((reading.duration_hours - 1.5).abs() < 1e-9);
        assert!((reading.weight_kg - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_truncates_fraction() {
        assert_eq!(as_count(40.9), 40);
        assert_eq!(as_count(0.0), 0);
    }

    #[test]
    fn test_count_keeps_negative_values() {
        assert_eq!(as_count(-1.0), -1);
        assert_eq!(as_count(-15000.0), -15000);
    }

    #[test]
    fn test_count_saturates_non_finite() {
        assert_eq!(as_count(f64::NAN), 0);
        assert_eq!(as_count(f64::INFINITY), i64::MAX);
    }
}
