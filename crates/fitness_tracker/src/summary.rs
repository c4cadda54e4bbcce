use serde::Serialize;
use std::fmt;

/// Snapshot of a workout's derived metrics, taken once at summary time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl Summary {
    pub fn new(
        training_type: &'static str,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the one-line report.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
