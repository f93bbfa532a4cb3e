//! Maps sensor type codes to workouts.

use std::fmt;
use std::str::FromStr;

use crate::errors::WorkoutError;
use crate::profiles::{FromPackage, Running, Swimming, Walking, WorkoutProfile};
use crate::reading::Reading;

/// Supported workout types, keyed by the sensor type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Short code the sensors send.
    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Number of values a package of this kind carries.
    pub fn field_count(self) -> usize {
        match self {
            Self::Running => Running::FIELD_COUNT,
            Self::Walking => Walking::FIELD_COUNT,
            Self::Swimming => Swimming::FIELD_COUNT,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A constructed workout of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking(_) => WorkoutKind::Walking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    fn profile(&self) -> &dyn WorkoutProfile {
        match self {
            Self::Running(w) => w,
            Self::Walking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl WorkoutProfile for Workout {
    fn name(&self) -> &'static str {
        self.profile().name()
    }

    fn reading(&self) -> &Reading {
        self.profile().reading()
    }

    fn step_length_m(&self) -> f64 {
        self.profile().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.profile().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.profile().mean_speed_kmh()
    }

    fn calories_kcal(&self) -> f64 {
        self.profile().calories_kcal()
    }
}

/// Builds a workout from a type code and its positional sensor values.
///
/// Values bind in order: action count, duration, weight, then the
/// workout-specific fields (height for walking; pool length and lap count
/// for swimming).
pub fn construct(type_code: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = type_code.parse()?;

    let expected = kind.field_count();
    if values.len() != expected {
        return Err(WorkoutError::ArgumentCount {
            code: type_code.to_string(),
            expected,
            actual: values.len(),
        });
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::from_values(values)),
        WorkoutKind::Walking => Workout::Walking(Walking::from_values(values)),
        WorkoutKind::Swimming => Workout::Swimming(Swimming::from_values(values)),
    };

    tracing::debug!(code = %kind, ?values, "Constructed workout");

    Ok(workout)
}

/// Computes the workout metrics and formats the report line.
pub fn render(workout: &Workout) -> String {
    workout.summary().to_string()
}
