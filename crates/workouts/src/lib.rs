//! Workout calculator.
//!
//! Turns raw sensor packages (a type code plus positional values) into
//! workouts, computes distance, mean speed and calories, and renders a
//! one-line summary per workout.
//!
//! # Quick Start
//!
//! ```rust
//! use workouts::prelude::*;
//!
//! let run = construct("RUN", &[15000.0, 1.0, 75.0])?;
//! assert_eq!(run.kind(), WorkoutKind::Running);
//! println!("{}", render(&run));
//! # Ok::<(), WorkoutError>(())
//! ```

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod profiles;
pub mod reading;
pub mod report;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::batch::{SensorPackage, default_packages, process_batch};
    pub use crate::config::{BatchConfig, OutputFormat};
    pub use crate::dispatch::{Workout, WorkoutKind, construct, render};
    pub use crate::errors::{ConfigError, WorkoutError};
    pub use crate::profiles::{Running, Swimming, Walking, WorkoutProfile};
    pub use crate::reading::Reading;
    pub use crate::report::WorkoutReport;
}
