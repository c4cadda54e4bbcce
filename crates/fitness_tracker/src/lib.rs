//! `Training` trait and the shared calculations behind every workout kind.

use thiserror::Error;

pub mod dispatch;
pub mod summary;
pub mod workouts;

pub use dispatch::{SensorPackage, WorkoutCode, read_package};
pub use summary::Summary;
pub use workouts::{Running, SportsWalking, Swimming, Workout};

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;
/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{code} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Raw sensor inputs common to every workout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionData {
    /// Steps or strokes, depending on the workout.
    pub action: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl SessionData {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

/// A single recorded exercise session.
///
/// Distance and speed have default implementations driven by
/// [`Training::step_length_m`]; each workout must supply its own calorie
/// formula.
pub trait Training {
    /// Name shown in the rendered summary.
    fn type_name(&self) -> &'static str;

    fn session(&self) -> &SessionData;

    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        self.session().action * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h. `duration_hours` must be positive.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    fn spent_calories(&self) -> f64;

    fn summarize(&self) -> Summary {
        Summary::new(
            self.type_name(),
            self.session().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}
